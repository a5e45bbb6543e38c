// ── Filter/reconciliation engine ──
//
// Pure state machine. `step` folds one `Intent` into `EngineState` and
// may hand back an `Effect` for the controller to run; the controller
// feeds the outcome back in as another intent.

pub mod intent;
pub mod pipeline;
pub mod reducer;
pub mod state;

pub use intent::{Effect, Intent, NarrowingResult, TypeMembers};
pub use reducer::{MAX_SELECTED_TYPES, step, validate_selection};
pub use state::EngineState;

//! Catalog state and filter engine between `pokedex-api` and UI consumers (CLI / TUI).
//!
//! This crate owns the domain model, the filter/reconciliation engine, and
//! the reactive state handle for the pokedex workspace:
//!
//! - **[`Pokedex`]** is the central handle. [`initialize()`](Pokedex::initialize)
//!   fetches the type roster and the first roster page concurrently, then every
//!   user intent ([`search`](Pokedex::search), [`toggle_type`](Pokedex::toggle_type),
//!   [`add_favourite`](Pokedex::add_favourite), ...) is routed through one
//!   reducer step. Cheap to clone; all clones share one state. Front-ends
//!   that fire intents without awaiting them use an [`IntentQueue`], drained
//!   in order by [`process_intents`](Pokedex::process_intents).
//!
//! - **[`engine`]** holds the pure parts: [`EngineState`], the [`Intent`] /
//!   [`Effect`] vocabulary, the reducer [`step`](engine::step), and the
//!   narrowing / filtering / sorting [`pipeline`](engine::pipeline).
//!
//! - **[`CatalogSource`]** is the seam to the remote catalog. The HTTP client
//!   implements it; tests provide in-memory sources.
//!
//! - **[`StateStream`]** is a subscription handle vended by the `Pokedex`.
//!   Exposes `current()` / `latest()` / `changed()` for reactive rendering.
//!
//! - **Domain model** ([`model`]) covers [`NamedResource`], [`TypedResource`],
//!   [`PokemonType`], and the favourite/filter state.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod ident;
pub mod model;
pub mod source;
pub mod stream;
pub mod util;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::CatalogConfig;
pub use controller::{IntentInbox, IntentQueue, Pokedex, intent_queue};
pub use engine::{Effect, EngineState, Intent, NarrowingResult};
pub use error::CoreError;
pub use ident::{id_of, is_original_generation};
pub use source::CatalogSource;
pub use stream::StateStream;
pub use util::same_elements;

pub use model::{Favourites, FilterField, FilterState, NamedResource, PokemonType, TypedResource};

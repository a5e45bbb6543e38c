//! Every UI state change goes through an `Action`.

use std::sync::Arc;

use pokedex_core::{EngineState, NamedResource, PokemonType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Lifecycle ──
    Quit,
    Tick,
    Render,

    // ── Overlays ──
    ToggleHelp,
    OpenSearch,
    CloseSearch,

    // ── Engine intents ──
    /// New query text; sent on every edit.
    SearchInput(String),
    ClearSearch,
    ToggleFavouritesOnly,
    ToggleFavourite(NamedResource),
    ToggleType(PokemonType),

    // ── Data bridge ──
    StateUpdated(Arc<EngineState>),
    /// Startup loads finished, successfully or not.
    CatalogReady,
}

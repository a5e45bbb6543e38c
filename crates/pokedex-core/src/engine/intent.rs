use crate::error::CoreError;
use crate::model::{FilterField, NamedResource, PokemonType};

/// Members of one type, as resolved from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMembers {
    pub ty: PokemonType,
    pub members: Vec<NamedResource>,
}

/// Outcome of resolving every selected type, in selection order.
pub type NarrowingResult = Result<Vec<TypeMembers>, CoreError>;

/// Everything that can change engine state.
#[derive(Debug, Clone)]
pub enum Intent {
    // ── Catalog ──────────────────────────────────────────────────────
    RosterLoaded(Vec<NamedResource>),
    TypesLoaded(Vec<NamedResource>),
    LoadFailed(String),

    // ── User ─────────────────────────────────────────────────────────
    Search(String),
    AddFavourite(String),
    RemoveFavourite(String),
    /// Add or remove a favourite, decided against the state it lands on.
    ToggleFavourite(String),
    AddFilter(FilterField, bool),
    RemoveFilter(FilterField),
    /// Clear the filter if it already holds `value`, otherwise set it.
    ToggleFilter(FilterField, bool),
    SelectTypes(Vec<PokemonType>),
    ToggleType(PokemonType),

    // ── Effect outcomes ──────────────────────────────────────────────
    /// Result of an [`Effect::ResolveTypes`], tagged with the generation
    /// it was issued for.
    TypesResolved {
        generation: u64,
        result: NarrowingResult,
    },
}

/// Side effect requested by a reducer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the members of each type, one at a time, in order.
    ResolveTypes {
        generation: u64,
        types: Vec<PokemonType>,
    },
}

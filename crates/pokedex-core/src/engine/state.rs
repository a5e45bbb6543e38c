use serde::Serialize;

use crate::model::{Favourites, FilterState, NamedResource, PokemonType, TypedResource};

/// Complete engine state. Consumers receive it as an immutable
/// `Arc<EngineState>` snapshot; only the reducer mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EngineState {
    /// First roster page, as loaded. Never changes after startup.
    pub roster: Vec<NamedResource>,
    /// Every type the catalog lists, including ones that are not selectable.
    pub type_roster: Vec<NamedResource>,
    /// Selected type tags in selection order. At most two, no duplicates.
    pub selected_types: Vec<PokemonType>,
    pub query: String,
    pub favourites: Favourites,
    pub filters: FilterState,
    /// Committed narrowing for the current selection, if one has landed.
    pub narrowed: Option<Vec<TypedResource>>,
    /// Output of the pipeline.
    pub displayed: Vec<NamedResource>,
    /// A narrowing for the current generation is in flight.
    pub loading: bool,
    /// Terminal error. Once set the session is over.
    pub error: Option<String>,
    /// Bumped on every selection change.
    pub generation: u64,
}

impl EngineState {
    /// Roster the field and text filters operate on.
    pub fn base_roster(&self) -> Vec<NamedResource> {
        match (&self.narrowed, self.selected_types.is_empty()) {
            (Some(narrowed), false) => narrowed.iter().map(|t| t.resource.clone()).collect(),
            _ => self.roster.clone(),
        }
    }

    /// Type tags from the type roster that can be selected, in catalog order.
    pub fn selectable_types(&self) -> Vec<PokemonType> {
        self.type_roster
            .iter()
            .filter_map(NamedResource::as_type)
            .collect()
    }

    pub fn is_selected(&self, ty: PokemonType) -> bool {
        self.selected_types.contains(&ty)
    }

    pub fn is_favourite(&self, name: &str) -> bool {
        self.favourites.contains(name)
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Type tags a displayed creature was discovered under, when a
    /// narrowing is committed.
    pub fn types_of(&self, name: &str) -> Option<&[PokemonType]> {
        self.narrowed
            .as_ref()?
            .iter()
            .find(|t| t.resource.name == name)
            .map(|t| t.types.as_slice())
    }
}

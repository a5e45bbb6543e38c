// ── Catalog resources ──

use serde::{Deserialize, Serialize};

use pokedex_api::NamedApiResource;

use crate::model::PokemonType;

/// A named catalog entry: a creature or a type.
///
/// `name` is the unique key. `url` encodes the numeric id as its
/// second-to-last path segment (see [`crate::ident::id_of`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Numeric id parsed from the url, if it has one.
    pub fn id(&self) -> Option<u32> {
        crate::ident::id_of(self)
    }

    /// The type tag this resource names, if it is one of the 18 known types.
    pub fn as_type(&self) -> Option<PokemonType> {
        self.name.parse().ok()
    }
}

impl From<NamedApiResource> for NamedResource {
    fn from(raw: NamedApiResource) -> Self {
        Self {
            name: raw.name,
            url: raw.url,
        }
    }
}

/// A resource annotated with the type tags it was discovered under
/// during type narrowing. `types` holds no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedResource {
    #[serde(flatten)]
    pub resource: NamedResource,
    pub types: Vec<PokemonType>,
}

impl TypedResource {
    pub fn new(resource: NamedResource) -> Self {
        Self {
            resource,
            types: Vec::new(),
        }
    }

    /// Record a discovery tag, ignoring repeats.
    pub fn tag(&mut self, ty: PokemonType) {
        if !self.types.contains(&ty) {
            self.types.push(ty);
        }
    }
}

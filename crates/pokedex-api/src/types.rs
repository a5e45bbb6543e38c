// Wire types for the PokeAPI v2 endpoints the catalog consumes.
//
// Only the fields the catalog reads are modelled; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// A `{ name, url }` reference to another API resource.
///
/// The url carries the numeric id as its last non-empty path segment,
/// e.g. `https://pokeapi.co/api/v2/pokemon/25/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

/// Paginated list envelope returned by list endpoints (`/pokemon`, `/type`).
#[derive(Debug, Clone, Deserialize)]
pub struct NamedApiResourceList {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedApiResource>,
}

/// `GET /type/{name}` response, reduced to the member list.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemon: Vec<TypePokemon>,
}

/// One member entry of a type, with its slot on that creature.
#[derive(Debug, Clone, Deserialize)]
pub struct TypePokemon {
    pub slot: u8,
    pub pokemon: NamedApiResource,
}

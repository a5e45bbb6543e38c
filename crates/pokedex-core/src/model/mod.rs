// ── Domain model ──
//
// Canonical representations of catalog entities and of the user's
// favourite/filter choices. Consumers (CLI/TUI) depend on these, never
// on the wire types of `pokedex-api`.

pub mod filter;
pub mod pokemon_type;
pub mod resource;

// ── Re-exports ──────────────────────────────────────────────────────

pub use filter::{Favourites, FilterField, FilterState};
pub use pokemon_type::PokemonType;
pub use resource::{NamedResource, TypedResource};

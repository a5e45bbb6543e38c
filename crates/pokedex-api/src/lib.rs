// pokedex-api: Async Rust client for the PokeAPI v2 catalog endpoints

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::PokeApiClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use types::{NamedApiResource, NamedApiResourceList, TypePokemon, TypeResponse};

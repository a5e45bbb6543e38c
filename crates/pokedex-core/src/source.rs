// ── Catalog source seam ──
//
// The engine only ever reads the catalog through this trait. The HTTP
// client implements it; tests plug in in-memory sources.

use std::future::Future;

use pokedex_api::PokeApiClient;

use crate::error::CoreError;
use crate::model::{NamedResource, PokemonType};

/// Read-only access to a remote creature catalog.
pub trait CatalogSource: Send + Sync + 'static {
    /// Every type the catalog lists.
    fn list_types(&self) -> impl Future<Output = Result<Vec<NamedResource>, CoreError>> + Send;

    /// One page of the creature roster.
    fn list_pokemon(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<NamedResource>, CoreError>> + Send;

    /// Every creature carrying the given type.
    fn type_members(
        &self,
        ty: PokemonType,
    ) -> impl Future<Output = Result<Vec<NamedResource>, CoreError>> + Send;
}

impl CatalogSource for PokeApiClient {
    async fn list_types(&self) -> Result<Vec<NamedResource>, CoreError> {
        let types = PokeApiClient::list_types(self).await?;
        Ok(types.into_iter().map(NamedResource::from).collect())
    }

    async fn list_pokemon(&self, limit: u32, offset: u32) -> Result<Vec<NamedResource>, CoreError> {
        let page = PokeApiClient::list_pokemon(self, limit, offset).await?;
        Ok(page.results.into_iter().map(NamedResource::from).collect())
    }

    async fn type_members(&self, ty: PokemonType) -> Result<Vec<NamedResource>, CoreError> {
        let detail = self.get_type(ty.as_str()).await?;
        Ok(detail
            .pokemon
            .into_iter()
            .map(|entry| NamedResource::from(entry.pokemon))
            .collect())
    }
}

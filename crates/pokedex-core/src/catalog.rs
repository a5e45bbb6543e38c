// ── Catalog store loaders ──
//
// The two startup fetches. Each runs once per session with no retry;
// the controller commits their outcomes through the reducer.

use tracing::{debug, warn};

use crate::engine::TypeMembers;
use crate::error::CoreError;
use crate::model::{NamedResource, PokemonType};
use crate::source::CatalogSource;

/// Fetch the complete type roster.
pub async fn load_types<S: CatalogSource>(source: &S) -> Result<Vec<NamedResource>, CoreError> {
    debug!("loading type roster");
    source.list_types().await.inspect_err(|e| {
        warn!(error = %e, "type roster fetch failed");
    })
}

/// Fetch one fixed page of the creature roster.
pub async fn load_roster<S: CatalogSource>(
    source: &S,
    page_size: u32,
    offset: u32,
) -> Result<Vec<NamedResource>, CoreError> {
    debug!(page_size, offset, "loading roster page");
    source
        .list_pokemon(page_size, offset)
        .await
        .inspect_err(|e| warn!(error = %e, "roster fetch failed"))
}

/// Resolve each type to its members, one request at a time, in order.
pub async fn resolve_members<S: CatalogSource>(
    source: &S,
    types: &[PokemonType],
) -> Result<Vec<TypeMembers>, CoreError> {
    let mut resolved = Vec::with_capacity(types.len());
    for &ty in types {
        debug!(%ty, "resolving type members");
        let members = source.type_members(ty).await?;
        resolved.push(TypeMembers { ty, members });
    }
    Ok(resolved)
}

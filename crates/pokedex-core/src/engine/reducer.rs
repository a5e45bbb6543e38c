// ── Reducer ──
//
// One intent in, state updated in place, at most one effect out.
// The displayed roster is recomputed before returning whenever an
// input of the pipeline changed.

use tracing::{debug, info, warn};

use super::intent::{Effect, Intent};
use super::pipeline;
use super::state::EngineState;
use crate::error::CoreError;
use crate::model::PokemonType;

/// Largest number of types that can be selected at once.
pub const MAX_SELECTED_TYPES: usize = 2;

/// Collapse duplicates (keeping first-seen order) and enforce the
/// selection bound.
pub fn validate_selection(types: &[PokemonType]) -> Result<Vec<PokemonType>, CoreError> {
    let distinct = dedup(types.to_vec());
    if distinct.len() > MAX_SELECTED_TYPES {
        return Err(CoreError::ValidationFailed {
            message: format!(
                "at most {MAX_SELECTED_TYPES} types can be selected, got {}",
                distinct.len()
            ),
        });
    }
    Ok(distinct)
}

/// Apply one intent.
pub fn step(state: &mut EngineState, intent: Intent) -> Option<Effect> {
    match intent {
        // ── Catalog ──────────────────────────────────────────────────
        Intent::RosterLoaded(roster) => {
            info!(count = roster.len(), "roster loaded");
            state.roster = roster;
            refresh(state);
            None
        }
        Intent::TypesLoaded(types) => {
            info!(count = types.len(), "type roster loaded");
            state.type_roster = types;
            None
        }
        Intent::LoadFailed(message) => {
            warn!(%message, "catalog load failed");
            state.error = Some(message);
            None
        }

        // ── Effect outcomes ──────────────────────────────────────────
        Intent::TypesResolved { generation, result } => {
            if generation != state.generation {
                debug!(
                    generation,
                    current = state.generation,
                    "discarding stale narrowing result"
                );
                return None;
            }
            state.loading = false;
            match result {
                Ok(resolved) => {
                    let narrowed = pipeline::narrow(&resolved, &state.selected_types);
                    debug!(generation, count = narrowed.len(), "narrowing committed");
                    state.narrowed = Some(narrowed);
                    refresh(state);
                }
                Err(e) => {
                    warn!(generation, error = %e, "type narrowing failed");
                    state.error = Some(e.to_string());
                }
            }
            None
        }

        // ── User ─────────────────────────────────────────────────────
        user if state.has_error() => {
            debug!(intent = ?user, "ignoring intent after terminal error");
            None
        }
        Intent::Search(query) => {
            state.query = query;
            refresh(state);
            None
        }
        Intent::AddFavourite(name) => {
            if state.favourites.insert(name) {
                refresh(state);
            }
            None
        }
        Intent::RemoveFavourite(name) => {
            if state.favourites.remove(&name) {
                refresh(state);
            }
            None
        }
        Intent::ToggleFavourite(name) => {
            if !state.favourites.remove(&name) {
                state.favourites.insert(name);
            }
            refresh(state);
            None
        }
        Intent::AddFilter(field, value) => {
            state.filters.set(field, value);
            refresh(state);
            None
        }
        Intent::RemoveFilter(field) => {
            state.filters.clear(field);
            refresh(state);
            None
        }
        Intent::ToggleFilter(field, value) => {
            if state.filters.get(field) == Some(value) {
                state.filters.clear(field);
            } else {
                state.filters.set(field, value);
            }
            refresh(state);
            None
        }
        Intent::SelectTypes(types) => {
            let types = dedup(types);
            if types.len() > MAX_SELECTED_TYPES {
                debug!(?types, "selection exceeds {MAX_SELECTED_TYPES} types, ignored");
                return None;
            }
            select(state, types)
        }
        Intent::ToggleType(ty) => {
            let mut types = state.selected_types.clone();
            if let Some(pos) = types.iter().position(|t| *t == ty) {
                types.remove(pos);
            } else if types.len() < MAX_SELECTED_TYPES {
                types.push(ty);
            } else {
                debug!(%ty, "selection full, toggle ignored");
                return None;
            }
            select(state, types)
        }
    }
}

/// Commit a new selection and start its narrowing.
fn select(state: &mut EngineState, types: Vec<PokemonType>) -> Option<Effect> {
    state.generation = state.generation.wrapping_add(1);
    state.selected_types = types;
    state.narrowed = None;

    let effect = if state.selected_types.is_empty() {
        state.loading = false;
        None
    } else {
        state.loading = true;
        Some(Effect::ResolveTypes {
            generation: state.generation,
            types: state.selected_types.clone(),
        })
    };
    debug!(
        generation = state.generation,
        types = ?state.selected_types,
        "type selection changed"
    );
    refresh(state);
    effect
}

fn refresh(state: &mut EngineState) {
    state.displayed = pipeline::recompute(state);
}

fn dedup(types: Vec<PokemonType>) -> Vec<PokemonType> {
    let mut out = Vec::with_capacity(types.len());
    for ty in types {
        if !out.contains(&ty) {
            out.push(ty);
        }
    }
    out
}

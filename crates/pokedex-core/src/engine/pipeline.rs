// ── Roster pipeline ──
//
// type narrowing → field filters → text filter → sort by id
//
// Every stage is a pure function; `recompute` runs the last three over
// the state's base roster. Narrowing runs separately, when a resolution
// result lands.

use indexmap::IndexMap;
use tracing::warn;

use super::intent::TypeMembers;
use super::state::EngineState;
use crate::ident;
use crate::model::{Favourites, FilterField, FilterState, NamedResource, PokemonType, TypedResource};
use crate::util::same_elements;

// ── Type narrowing ──────────────────────────────────────────────────

/// Merge per-type member lists and keep only creatures whose discovered
/// tags are exactly the selected set.
///
/// Tags come only from the lists being merged. For a {grass, fire}
/// selection a creature listed under grass alone is dropped.
pub fn narrow(resolved: &[TypeMembers], selected: &[PokemonType]) -> Vec<TypedResource> {
    let mut merged: IndexMap<String, TypedResource> = IndexMap::new();

    for TypeMembers { ty, members } in resolved {
        for member in members {
            merged
                .entry(member.name.clone())
                .or_insert_with(|| TypedResource::new(member.clone()))
                .tag(*ty);
        }
    }

    merged
        .into_values()
        .filter(|r| same_elements(&r.types, selected))
        .collect()
}

// ── Field filters ───────────────────────────────────────────────────

fn field_matches(
    field: FilterField,
    value: bool,
    resource: &NamedResource,
    favourites: &Favourites,
) -> bool {
    match field {
        FilterField::Favourite => favourites.contains(&resource.name) == value,
    }
}

/// Apply every set field filter. Absent fields apply no predicate.
pub fn apply_filters(
    roster: Vec<NamedResource>,
    filters: &FilterState,
    favourites: &Favourites,
) -> Vec<NamedResource> {
    if filters.is_empty() {
        return roster;
    }
    roster
        .into_iter()
        .filter(|r| {
            filters
                .iter()
                .all(|(field, value)| field_matches(field, value, r, favourites))
        })
        .collect()
}

// ── Text filter ─────────────────────────────────────────────────────

/// Keep names containing `query` as a literal, case-sensitive substring.
pub fn apply_query(roster: Vec<NamedResource>, query: &str) -> Vec<NamedResource> {
    if query.is_empty() {
        return roster;
    }
    roster.into_iter().filter(|r| r.name.contains(query)).collect()
}

// ── Sort ────────────────────────────────────────────────────────────

/// Stable ascending sort by numeric id. Resources without a parsable id
/// keep their relative order after all others.
pub fn sort_by_id(roster: &mut [NamedResource]) {
    for r in roster.iter().filter(|r| ident::id_of(r).is_none()) {
        warn!(name = %r.name, url = %r.url, "resource url carries no numeric id, sorting last");
    }
    roster.sort_by_key(ident::sort_key);
}

// ── Full recompute ──────────────────────────────────────────────────

/// Derive the displayed roster from the current state.
pub fn recompute(state: &EngineState) -> Vec<NamedResource> {
    let filtered = apply_filters(state.base_roster(), &state.filters, &state.favourites);
    let mut displayed = apply_query(filtered, &state.query);
    sort_by_id(&mut displayed);
    displayed
}

// ── Favourites and field filters ──

use std::collections::BTreeMap;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Fields a boolean filter can be applied to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FilterField {
    /// `true` keeps favourites, `false` keeps everything else.
    Favourite,
}

/// Per-field filter values. A missing key means the field is not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState(BTreeMap<FilterField, bool>);

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FilterField) -> Option<bool> {
        self.0.get(&field).copied()
    }

    pub fn set(&mut self, field: FilterField, value: bool) {
        self.0.insert(field, value);
    }

    pub fn clear(&mut self, field: FilterField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterField, bool)> + '_ {
        self.0.iter().map(|(f, v)| (*f, *v))
    }
}

/// Names the user marked as favourite, in the order they were added.
///
/// Not checked against the roster: a name stays here even if no loaded
/// creature carries it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favourites(IndexSet<String>);

impl Favourites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the name was not already a favourite.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    /// Returns `true` if the name was a favourite. Keeps the order of the rest.
    pub fn remove(&mut self, name: &str) -> bool {
        self.0.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Favourites {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_field_reads_as_none() {
        let mut filters = FilterState::new();
        assert_eq!(filters.get(FilterField::Favourite), None);
        filters.set(FilterField::Favourite, false);
        assert_eq!(filters.get(FilterField::Favourite), Some(false));
        filters.clear(FilterField::Favourite);
        assert!(filters.is_empty());
    }

    #[test]
    fn favourites_round_trip_preserves_order() {
        let mut favs: Favourites = ["mew", "abra", "onix"].into_iter().collect();
        let before = favs.clone();

        assert!(favs.insert("pikachu"));
        assert!(favs.remove("pikachu"));
        assert_eq!(favs, before);
        assert_eq!(favs.iter().collect::<Vec<_>>(), ["mew", "abra", "onix"]);
    }

    #[test]
    fn removing_from_the_middle_keeps_order() {
        let mut favs: Favourites = ["mew", "abra", "onix"].into_iter().collect();
        assert!(favs.remove("abra"));
        assert!(!favs.remove("abra"));
        assert_eq!(favs.iter().collect::<Vec<_>>(), ["mew", "onix"]);
    }

    #[test]
    fn duplicate_insert_is_reported() {
        let mut favs = Favourites::new();
        assert!(favs.insert("mew"));
        assert!(!favs.insert("mew"));
        assert_eq!(favs.len(), 1);
    }
}

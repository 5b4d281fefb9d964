//! League-prefix to country mapping cache.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Country;

/// Persistent prefix → country cache.
///
/// Backed by a `BTreeMap` so iteration and serialization are always sorted
/// by prefix. The store only grows: an existing entry is never replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingStore {
    entries: BTreeMap<String, Country>,
}

impl MappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, prefix: &str) -> Option<&Country> {
        self.entries.get(prefix)
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.entries.contains_key(prefix)
    }

    /// Adds a mapping unless the prefix is already cached.
    ///
    /// Returns `true` if the entry was added.
    pub fn insert_if_absent(&mut self, prefix: impl Into<String>, country: Country) -> bool {
        let prefix = prefix.into();
        if self.entries.contains_key(&prefix) {
            return false;
        }
        self.entries.insert(prefix, country);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if every entry of `other` is present here with the same value.
    #[cfg(test)]
    pub fn is_superset_of(&self, other: &MappingStore) -> bool {
        other
            .entries
            .iter()
            .all(|(k, v)| self.entries.get(k) == Some(v))
    }
}

impl FromIterator<(String, Country)> for MappingStore {
    fn from_iter<I: IntoIterator<Item = (String, Country)>>(iter: I) -> Self {
        let mut store = MappingStore::new();
        for (prefix, country) in iter {
            store.insert_if_absent(prefix, country);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_if_absent_never_overwrites() {
        let mut store = MappingStore::new();
        assert!(store.insert_if_absent("UK", Country::new("GBR", "United Kingdom")));
        assert!(!store.insert_if_absent("UK", Country::new("UKR", "Ukraine")));

        assert_eq!(store.get("UK").unwrap().alpha3, "GBR");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_serializes_sorted_by_prefix() {
        let store: MappingStore = vec![
            ("USA".to_string(), Country::new("USA", "United States")),
            ("ARG".to_string(), Country::new("ARG", "Argentina")),
            ("FRA".to_string(), Country::new("FRA", "France")),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&store).unwrap();
        let arg = json.find("\"ARG\"").unwrap();
        let fra = json.find("\"FRA\"").unwrap();
        let usa = json.find("\"USA\"").unwrap();

        assert!(arg < fra && fra < usa);
        assert!(json.contains(r#""ALPHA-3":"ARG""#));
        assert!(json.contains(r#""NAME":"Argentina""#));
    }

    #[test]
    fn test_is_superset_of() {
        let mut before = MappingStore::new();
        before.insert_if_absent("ESP", Country::new("ESP", "Spain"));

        let mut after = before.clone();
        after.insert_if_absent("ITA", Country::new("ITA", "Italy"));

        assert!(after.is_superset_of(&before));
        assert!(!before.is_superset_of(&after));
    }
}

//! League prefix → country identity resolution.
//!
//! Resolution consults the [`MappingStore`] first. On a miss, a two-letter
//! prefix is looked up as an alpha-2 code and a three-letter prefix as an
//! alpha-3 code against a [`CountryCodeList`]; hits are written back into the
//! store. Anything else is reported as unresolved and never guessed.
//!
//! This module does no I/O. Persisting the store is the caller's job.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::domain::entities::Country;
use crate::domain::mapping_store::MappingStore;

/// A standard country code list used as the fallback lookup.
#[cfg_attr(test, mockall::automock)]
pub trait CountryCodeList {
    fn lookup_alpha2(&self, code: &str) -> Option<Country>;
    fn lookup_alpha3(&self, code: &str) -> Option<Country>;
}

/// Outcome of one resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub resolved: BTreeMap<String, Country>,
    pub unresolved: BTreeSet<String>,
    /// Prefixes added to the store during this pass.
    pub added: BTreeSet<String>,
}

impl Resolution {
    pub fn country(&self, prefix: &str) -> Option<&Country> {
        self.resolved.get(prefix)
    }
}

/// Resolves every prefix in `prefixes`, growing `store` with new lookups.
pub fn resolve<L: CountryCodeList + ?Sized>(
    prefixes: &BTreeSet<String>,
    store: &mut MappingStore,
    codes: &L,
) -> Resolution {
    let mut resolution = Resolution::default();

    for prefix in prefixes {
        if let Some(country) = store.get(prefix) {
            debug!("Mapping HIT: {} -> {}", prefix, country.alpha3);
            resolution.resolved.insert(prefix.clone(), country.clone());
            continue;
        }

        let looked_up = match prefix.chars().count() {
            2 => codes.lookup_alpha2(prefix),
            3 => codes.lookup_alpha3(prefix),
            _ => None,
        };

        match looked_up {
            Some(country) => {
                debug!("Mapping MISS resolved: {} -> {}", prefix, country.alpha3);
                store.insert_if_absent(prefix.clone(), country.clone());
                resolution.added.insert(prefix.clone());
                resolution.resolved.insert(prefix.clone(), country);
            }
            None => {
                warn!("No country mapping for league prefix '{}'", prefix);
                resolution.unresolved.insert(prefix.clone());
            }
        }
    }

    resolution
}

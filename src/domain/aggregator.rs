//! Career path aggregation: join, normalize, filter, deduplicate.
//!
//! Steps, in order:
//!
//! 1. Flatten all placement batches and derive each row's league prefix.
//! 2. Resolve the distinct prefixes through the country resolver. Rows with an
//!    unresolved prefix keep empty country fields.
//! 3. Left-join on external identifier against the draft registry.
//! 4. Compute years-from-draft for every row.
//! 5. Keep rows with `-10 < years_from_draft <= 30`. Rows without a joined
//!    draft year or with an unreadable season label have no offset and are
//!    dropped here.
//! 6. Remove exact duplicates, keeping the first occurrence.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{info, warn};

use crate::domain::country_resolver::{CountryCodeList, resolve};
use crate::domain::entities::{CareerPathRow, Entrant, PlacementBatch};
use crate::domain::mapping_store::MappingStore;
use crate::utils::league::league_prefix;
use crate::utils::timeline::{current_year, years_since_reference_at};

/// Exclusive lower bound of the outlier gate.
pub const OUTLIER_MIN_EXCLUSIVE: i32 = -10;
/// Inclusive upper bound of the outlier gate.
pub const OUTLIER_MAX_INCLUSIVE: i32 = 30;

/// Result of an aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub rows: Vec<CareerPathRow>,
    /// League prefixes with no country mapping.
    pub unresolved: BTreeSet<String>,
    /// Prefixes newly added to the mapping store.
    pub new_mappings: BTreeSet<String>,
    pub unjoined: usize,
    pub invalid_seasons: usize,
    pub outliers: usize,
    pub duplicates: usize,
}

/// Returns true if `years` passes the outlier gate.
pub fn within_career_window(years: i32) -> bool {
    OUTLIER_MIN_EXCLUSIVE < years && years <= OUTLIER_MAX_INCLUSIVE
}

/// Builds the enriched career path table anchored on today's century.
pub fn aggregate<L: CountryCodeList + ?Sized>(
    batches: &[PlacementBatch],
    registry: &[Entrant],
    store: &mut MappingStore,
    codes: &L,
) -> Aggregation {
    aggregate_at(batches, registry, store, codes, current_year())
}

/// Same as [`aggregate`] with an explicit "now" year for the timeline.
pub fn aggregate_at<L: CountryCodeList + ?Sized>(
    batches: &[PlacementBatch],
    registry: &[Entrant],
    store: &mut MappingStore,
    codes: &L,
    now_year: i32,
) -> Aggregation {
    let placements: Vec<_> = batches.iter().flat_map(|b| b.placements.iter()).collect();

    let prefixes: BTreeSet<String> = placements
        .iter()
        .map(|p| league_prefix(&p.league).to_string())
        .collect();
    let resolution = resolve(&prefixes, store, codes);

    let mut by_external_id: HashMap<i64, Vec<&Entrant>> = HashMap::new();
    for entrant in registry {
        if let Some(id) = entrant.external_id {
            by_external_id.entry(id).or_default().push(entrant);
        }
    }

    let mut aggregation = Aggregation {
        unresolved: resolution.unresolved.clone(),
        new_mappings: resolution.added.clone(),
        ..Aggregation::default()
    };
    let mut seen: HashSet<CareerPathRow> = HashSet::new();

    for placement in placements {
        let prefix = league_prefix(&placement.league);
        let country = resolution.country(prefix);

        let matches: Vec<Option<&Entrant>> = match by_external_id.get(&placement.external_id) {
            Some(entrants) => entrants.iter().copied().map(Some).collect(),
            None => vec![None],
        };

        for entrant in matches {
            let Some(entrant) = entrant else {
                aggregation.unjoined += 1;
                continue;
            };

            let years = match years_since_reference_at(
                &placement.season,
                entrant.draft_year,
                now_year,
            ) {
                Ok(years) => years,
                Err(e) => {
                    warn!("Skipping placement of {}: {}", placement.player_name, e);
                    aggregation.invalid_seasons += 1;
                    continue;
                }
            };

            if !within_career_window(years) {
                aggregation.outliers += 1;
                continue;
            }

            let row = CareerPathRow {
                player_name: placement.player_name.clone(),
                external_id: placement.external_id,
                draft_year: Some(entrant.draft_year),
                overall_pick: Some(entrant.overall_pick),
                season: placement.season.clone(),
                team: placement.team.clone(),
                league: placement.league.clone(),
                league_prefix: prefix.to_string(),
                country_alpha3: country.map(|c| c.alpha3.clone()),
                country_name: country.map(|c| c.name.clone()),
                years_from_draft: years,
            };

            if seen.insert(row.clone()) {
                aggregation.rows.push(row);
            } else {
                aggregation.duplicates += 1;
            }
        }
    }

    info!(
        rows = aggregation.rows.len(),
        unjoined = aggregation.unjoined,
        outliers = aggregation.outliers,
        duplicates = aggregation.duplicates,
        unresolved = aggregation.unresolved.len(),
        "Career paths aggregated"
    );

    aggregation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Country, Placement};
    use crate::utils::iso3166::Iso3166;

    const NOW: i32 = 2026;

    fn placement(id: i64, season: &str, team: &str, league: &str, draft_year: i32) -> Placement {
        Placement {
            player_name: format!("Player {id}"),
            external_id: id,
            season: season.to_string(),
            team: team.to_string(),
            league: league.to_string(),
            draft_year,
        }
    }

    fn batch(draft_year: i32, placements: Vec<Placement>) -> PlacementBatch {
        PlacementBatch {
            draft_year,
            placements,
        }
    }

    fn registry() -> Vec<Entrant> {
        vec![
            Entrant::new("Player 1".to_string(), Some(1), 2018, 5),
            Entrant::new("Player 2".to_string(), Some(2), 2018, 40),
            Entrant::new("Uncurated".to_string(), None, 2018, 41),
        ]
    }

    #[test]
    fn test_join_and_country_resolution() {
        let batches = vec![batch(
            2018,
            vec![
                placement(1, "18-19", "Lakers", "USA-1", 2018),
                placement(1, "22-23", "Bourg-en-Bresse", "FRA-1", 2018),
            ],
        )];
        let mut store = MappingStore::new();

        let result = aggregate_at(&batches, &registry(), &mut store, &Iso3166, NOW);

        assert_eq!(result.rows.len(), 2);
        let french = &result.rows[1];
        assert_eq!(french.draft_year, Some(2018));
        assert_eq!(french.overall_pick, Some(5));
        assert_eq!(french.league_prefix, "FRA");
        assert_eq!(french.country_alpha3.as_deref(), Some("FRA"));
        assert_eq!(french.country_name.as_deref(), Some("France"));
        assert_eq!(french.years_from_draft, 4);
        assert!(store.contains("USA") && store.contains("FRA"));
    }

    #[test]
    fn test_unresolved_prefix_keeps_row_with_null_country() {
        let batches = vec![batch(2018, vec![placement(2, "19-20", "Real Madrid", "EUR-1", 2018)])];
        let mut store = MappingStore::new();

        let result = aggregate_at(&batches, &registry(), &mut store, &Iso3166, NOW);

        assert_eq!(result.rows.len(), 1);
        assert!(result.rows[0].country_alpha3.is_none());
        assert!(result.rows[0].country_name.is_none());
        assert!(result.unresolved.contains("EUR"));
    }

    #[test]
    fn test_cached_mapping_wins_over_lookup() {
        let batches = vec![batch(2018, vec![placement(1, "20-21", "Leeds", "UK-1", 2018)])];
        let mut store = MappingStore::new();
        store.insert_if_absent("UK", Country::new("GBR", "United Kingdom"));

        let result = aggregate_at(&batches, &registry(), &mut store, &Iso3166, NOW);

        assert_eq!(result.rows[0].country_alpha3.as_deref(), Some("GBR"));
        assert!(result.new_mappings.is_empty());
    }

    #[test]
    fn test_unjoined_rows_are_dropped_by_gate() {
        let batches = vec![batch(2018, vec![placement(77, "19-20", "Nowhere", "ESP-1", 2018)])];
        let mut store = MappingStore::new();

        let result = aggregate_at(&batches, &registry(), &mut store, &Iso3166, NOW);

        assert!(result.rows.is_empty());
        assert_eq!(result.unjoined, 1);
        // Prefix is still resolved and cached.
        assert!(store.contains("ESP"));
    }

    #[test]
    fn test_outlier_gate_bounds() {
        let registry = vec![Entrant::new("Veteran".to_string(), Some(9), 1990, 1)];
        let batches = vec![batch(
            1990,
            vec![
                // 2020 - 1990 = 30 is kept (inclusive upper bound, via fallback)
                placement(9, "20-21", "A", "ITA-1", 1990),
                // 2021 - 1990 = 31 is dropped
                placement(9, "21-22", "B", "ITA-1", 1990),
                // 1981 - 1990 = -9 is kept
                placement(9, "81-82", "C", "ITA-1", 1990),
                // 1980 - 1990 = -10 misses the window, fallback offset 90 is dropped
                placement(9, "80-81", "D", "ITA-1", 1990),
            ],
        )];
        let mut store = MappingStore::new();

        let result = aggregate_at(&batches, &registry, &mut store, &Iso3166, NOW);

        let years: Vec<i32> = result.rows.iter().map(|r| r.years_from_draft).collect();
        assert_eq!(years, vec![30, -9]);
        assert_eq!(result.outliers, 2);
        assert!(result.rows.iter().all(|r| within_career_window(r.years_from_draft)));
    }

    #[test]
    fn test_exact_duplicates_collapsed() {
        let row = placement(1, "19-20", "Lakers", "USA-1", 2018);
        let batches = vec![
            batch(2018, vec![row.clone(), row.clone()]),
            batch(2018, vec![row]),
        ];
        let mut store = MappingStore::new();

        let result = aggregate_at(&batches, &registry(), &mut store, &Iso3166, NOW);

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.duplicates, 2);
    }

    #[test]
    fn test_same_season_different_team_is_not_duplicate() {
        let batches = vec![batch(
            2018,
            vec![
                placement(1, "19-20", "Lakers", "USA-1", 2018),
                placement(1, "19-20", "South Bay", "USA-2", 2018),
            ],
        )];
        let mut store = MappingStore::new();

        let result = aggregate_at(&batches, &registry(), &mut store, &Iso3166, NOW);

        assert_eq!(result.rows.len(), 2);
    }

    #[test]
    fn test_corrupt_draft_year_is_dropped_not_panicking() {
        let registry = vec![Entrant::new("Corrupt", Some(9), i32::MIN + 5, 1)];
        let batches = vec![batch(2018, vec![placement(9, "23-24", "T", "USA-1", 2018)])];
        let mut store = MappingStore::new();

        let result = aggregate_at(&batches, &registry, &mut store, &Iso3166, NOW);

        assert!(result.rows.is_empty());
        assert_eq!(result.invalid_seasons, 1);
    }

    #[test]
    fn test_invalid_season_is_dropped() {
        let batches = vec![batch(2018, vec![placement(1, "Total", "", "USA-1", 2018)])];
        let mut store = MappingStore::new();

        let result = aggregate_at(&batches, &registry(), &mut store, &Iso3166, NOW);

        assert!(result.rows.is_empty());
        assert_eq!(result.invalid_seasons, 1);
    }

    #[test]
    fn test_empty_input() {
        let mut store = MappingStore::new();

        let result = aggregate_at(&[], &registry(), &mut store, &Iso3166, NOW);

        assert_eq!(result, Aggregation::default());
    }
}

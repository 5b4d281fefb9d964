//! Draft registry reconciliation.
//!
//! Merges a freshly fetched registry into the locally curated one without
//! touching existing entries. The default novelty test is deliberately
//! coarse: a fetched entrant counts as new only when its draft year is absent
//! from the local registry AND its pick number is absent from the local
//! registry (across all years). [`NoveltyRule::PerYearKey`] is available as an
//! explicit opt-in for the compound `(draft year, pick)` test.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde_json::json;

use crate::domain::entities::Entrant;
use crate::error::AppError;

/// How a fetched entrant is judged to be new.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoveltyRule {
    /// Draft year unseen AND pick number unseen, each checked registry-wide.
    #[default]
    YearAndPick,
    /// `(draft year, pick)` pair unseen.
    PerYearKey,
}

impl NoveltyRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoveltyRule::YearAndPick => "year-and-pick",
            NoveltyRule::PerYearKey => "per-year-key",
        }
    }
}

impl fmt::Display for NoveltyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoveltyRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "year-and-pick" => Ok(NoveltyRule::YearAndPick),
            "per-year-key" => Ok(NoveltyRule::PerYearKey),
            other => Err(format!(
                "unknown novelty rule '{other}' (expected 'year-and-pick' or 'per-year-key')"
            )),
        }
    }
}

/// Entrants in `fetched` that `rule` considers new, with their external
/// identifier cleared. Repeated keys inside `fetched` are collapsed to the
/// first occurrence.
pub fn new_entrants(existing: &[Entrant], fetched: &[Entrant], rule: NoveltyRule) -> Vec<Entrant> {
    let years: HashSet<i32> = existing.iter().map(|e| e.draft_year).collect();
    let picks: HashSet<u32> = existing.iter().map(|e| e.overall_pick).collect();
    let keys: HashSet<(i32, u32)> = existing.iter().map(Entrant::key).collect();

    let mut seen = HashSet::new();
    fetched
        .iter()
        .filter(|e| match rule {
            NoveltyRule::YearAndPick => {
                !years.contains(&e.draft_year) && !picks.contains(&e.overall_pick)
            }
            NoveltyRule::PerYearKey => !keys.contains(&e.key()),
        })
        .filter(|e| seen.insert(e.key()))
        .map(|e| Entrant {
            external_id: None,
            ..e.clone()
        })
        .collect()
}

/// Appends new entrants from `fetched` to `existing` and returns the merged
/// registry in canonical order.
///
/// Existing entries are kept as-is, including their external identifiers.
/// Running it again with the same `fetched` is a no-op.
pub fn reconcile(
    mut existing: Vec<Entrant>,
    fetched: &[Entrant],
    rule: NoveltyRule,
) -> Vec<Entrant> {
    let added = new_entrants(&existing, fetched, rule);
    existing.extend(added);
    sort_registry(&mut existing);
    existing
}

/// Sorts by draft year descending, then pick ascending.
pub fn sort_registry(entrants: &mut [Entrant]) {
    entrants.sort_by_key(|e| (Reverse(e.draft_year), e.overall_pick));
}

/// Checks the `(draft year, pick)` uniqueness invariant.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the first repeated key.
pub fn validate_unique_keys(entrants: &[Entrant]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(entrants.len());
    for entrant in entrants {
        if !seen.insert(entrant.key()) {
            return Err(AppError::validation(
                "Duplicate draft registry key",
                json!({
                    "draft_year": entrant.draft_year,
                    "overall_pick": entrant.overall_pick,
                    "player_name": entrant.name,
                }),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entrant(year: i32, pick: u32, id: Option<i64>) -> Entrant {
        Entrant::new(format!("Player {year}-{pick}"), id, year, pick)
    }

    fn draft(year: i32, picks: std::ops::RangeInclusive<u32>) -> Vec<Entrant> {
        picks.map(|p| entrant(year, p, None)).collect()
    }

    #[test]
    fn test_new_draft_year_is_appended_with_null_id() {
        let existing = vec![entrant(2023, 1, Some(11)), entrant(2023, 2, Some(12))];
        let mut fetched = existing.clone();
        fetched.push(entrant(2024, 61, Some(999)));

        let merged = reconcile(existing, &fetched, NoveltyRule::YearAndPick);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].key(), (2024, 61));
        assert!(merged[0].external_id.is_none());
    }

    #[test]
    fn test_year_and_pick_rule_requires_both_absent() {
        let existing = draft(2023, 1..=60);
        // Year 2024 is new but picks 1-60 already exist somewhere in the registry.
        let fetched = draft(2024, 1..=60);

        let merged = reconcile(existing.clone(), &fetched, NoveltyRule::YearAndPick);

        assert_eq!(merged, existing);
    }

    #[test]
    fn test_year_and_pick_rule_ignores_new_pick_in_known_year() {
        let existing = draft(2024, 1..=5);
        let fetched = draft(2024, 1..=6);

        let merged = reconcile(existing, &fetched, NoveltyRule::YearAndPick);

        assert_eq!(merged.len(), 5);
    }

    #[test]
    fn test_per_year_key_rule_appends_new_pick() {
        let existing: Vec<Entrant> = (1..=5).map(|p| entrant(2024, p, Some(p as i64))).collect();
        let fetched = draft(2024, 1..=6);

        let merged = reconcile(existing, &fetched, NoveltyRule::PerYearKey);

        assert_eq!(merged.iter().filter(|e| e.draft_year == 2024).count(), 6);
        let sixth = merged.iter().find(|e| e.overall_pick == 6).unwrap();
        assert!(sixth.external_id.is_none());
        assert_eq!(merged[0].external_id, Some(1));
    }

    #[test]
    fn test_existing_external_ids_preserved() {
        let existing = vec![entrant(2020, 1, Some(5001)), entrant(2020, 2, None)];
        let fetched = vec![entrant(2020, 1, None), entrant(2020, 2, None)];

        let merged = reconcile(existing.clone(), &fetched, NoveltyRule::PerYearKey);

        assert_eq!(merged, existing);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let existing = draft(2022, 1..=3);
        let mut fetched = draft(2022, 1..=3);
        fetched.extend(vec![entrant(2025, 10, None), entrant(2025, 11, None)]);

        for rule in [NoveltyRule::YearAndPick, NoveltyRule::PerYearKey] {
            let once = reconcile(existing.clone(), &fetched, rule);
            let twice = reconcile(once.clone(), &fetched, rule);
            assert_eq!(once, twice, "rule {rule}");
        }
    }

    #[test]
    fn test_sorted_year_desc_pick_asc() {
        let existing = vec![entrant(2019, 2, None), entrant(2021, 3, None)];
        let fetched = vec![entrant(2025, 9, None), entrant(2025, 7, None)];

        let merged = reconcile(existing, &fetched, NoveltyRule::YearAndPick);
        let keys: Vec<_> = merged.iter().map(Entrant::key).collect();

        assert_eq!(keys, vec![(2025, 7), (2025, 9), (2021, 3), (2019, 2)]);
    }

    #[test]
    fn test_duplicate_keys_in_fetch_are_collapsed() {
        let fetched = vec![entrant(2025, 1, None), entrant(2025, 1, None)];

        for rule in [NoveltyRule::YearAndPick, NoveltyRule::PerYearKey] {
            let merged = reconcile(Vec::new(), &fetched, rule);
            assert_eq!(merged.len(), 1);
            assert!(validate_unique_keys(&merged).is_ok());
        }
    }

    #[test]
    fn test_validate_unique_keys_rejects_duplicates() {
        let entrants = vec![entrant(2024, 1, None), entrant(2024, 1, Some(3))];

        let err = validate_unique_keys(&entrants).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.details()["overall_pick"], 1);
    }

    #[test]
    fn test_novelty_rule_parsing() {
        assert_eq!("per-year-key".parse::<NoveltyRule>(), Ok(NoveltyRule::PerYearKey));
        assert_eq!("YEAR-AND-PICK".parse::<NoveltyRule>(), Ok(NoveltyRule::YearAndPick));
        assert!("compound".parse::<NoveltyRule>().is_err());
        assert_eq!(NoveltyRule::default(), NoveltyRule::YearAndPick);
    }
}

//! Country-per-year summary of the career path table.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::domain::entities::CareerPathRow;

/// Number of distinct entrants playing in a country at a given career offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryYearCount {
    pub years_from_draft: i32,
    pub alpha3: String,
    pub name: String,
    pub count: usize,
}

/// Per-year country counts plus the draft years they cover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountrySummary {
    pub counts: Vec<CountryYearCount>,
    pub min_draft_year: Option<i32>,
    pub max_draft_year: Option<i32>,
}

/// Summaries computed over an already-built career path table.
pub struct StatsService;

impl StatsService {
    /// Counts entrants per `(years_from_draft, country)`.
    ///
    /// An entrant with several placements in the same country and offset is
    /// counted once. Rows without a resolved country are left out of the
    /// counts but still contribute to the draft-year range.
    pub fn country_counts_by_year(rows: &[CareerPathRow]) -> CountrySummary {
        let mut seen: HashSet<(i64, i32, &str)> = HashSet::new();
        let mut counts: BTreeMap<(i32, &str, &str), usize> = BTreeMap::new();

        for row in rows {
            let (Some(alpha3), Some(name)) = (&row.country_alpha3, &row.country_name) else {
                continue;
            };
            if seen.insert((row.external_id, row.years_from_draft, alpha3.as_str())) {
                *counts
                    .entry((row.years_from_draft, alpha3.as_str(), name.as_str()))
                    .or_default() += 1;
            }
        }

        let draft_years = rows.iter().filter_map(|r| r.draft_year);

        CountrySummary {
            counts: counts
                .into_iter()
                .map(|((years_from_draft, alpha3, name), count)| CountryYearCount {
                    years_from_draft,
                    alpha3: alpha3.to_string(),
                    name: name.to_string(),
                    count,
                })
                .collect(),
            min_draft_year: draft_years.clone().min(),
            max_draft_year: draft_years.max(),
        }
    }
}

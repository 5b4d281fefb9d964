//! Enriched career path row, the pipeline's output grain.

use serde::Serialize;

/// One placement joined with its draft metadata and resolved country.
///
/// Country fields are `None` when the league prefix could not be resolved.
/// Draft fields are `None` when the placement's identifier has no registry
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CareerPathRow {
    pub player_name: String,
    pub external_id: i64,
    pub draft_year: Option<i32>,
    pub overall_pick: Option<u32>,
    pub season: String,
    pub team: String,
    pub league: String,
    pub league_prefix: String,
    pub country_alpha3: Option<String>,
    pub country_name: Option<String>,
    pub years_from_draft: i32,
}

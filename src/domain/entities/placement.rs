//! Placement records: one season/team/league assignment for an entrant.

use serde::{Deserialize, Serialize};

/// A season/team/league triple as returned by the placement source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementEntry {
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "League")]
    pub league: String,
}

/// A stored placement, denormalized with the entrant's name and draft year.
///
/// Batches of these are written per draft year and never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(rename = "Player_Name")]
    pub player_name: String,
    #[serde(rename = "Proballers_ID")]
    pub external_id: i64,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "League")]
    pub league: String,
    #[serde(rename = "Draft_Year")]
    pub draft_year: i32,
}

impl Placement {
    /// Builds a stored placement from a fetched entry and its entrant.
    pub fn from_entry(
        entry: PlacementEntry,
        player_name: &str,
        external_id: i64,
        draft_year: i32,
    ) -> Self {
        Self {
            player_name: player_name.to_string(),
            external_id,
            season: entry.season,
            team: entry.team,
            league: entry.league,
            draft_year,
        }
    }
}

/// All placements scraped for one draft year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementBatch {
    pub draft_year: i32,
    pub placements: Vec<Placement>,
}

//! Entrant entity representing one drafted player in one draft event.

use serde::{Deserialize, Serialize};

/// A drafted player as recorded in the draft registry.
///
/// `(draft_year, overall_pick)` is unique across the registry. The
/// `external_id` is the only field that changes after creation; it starts as
/// `None` and is filled in by manual curation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrant {
    #[serde(rename = "PLAYER_NAME")]
    pub name: String,
    #[serde(rename = "PROBALLERS_ID")]
    pub external_id: Option<i64>,
    #[serde(rename = "SEASON")]
    pub draft_year: i32,
    #[serde(rename = "OVERALL_PICK")]
    pub overall_pick: u32,
}

impl Entrant {
    /// Creates a new Entrant instance.
    pub fn new(
        name: impl Into<String>,
        external_id: Option<i64>,
        draft_year: i32,
        overall_pick: u32,
    ) -> Self {
        Self {
            name: name.into(),
            external_id,
            draft_year,
            overall_pick,
        }
    }

    /// The registry's unique key.
    pub fn key(&self) -> (i32, u32) {
        (self.draft_year, self.overall_pick)
    }

    /// Returns true once curation has assigned an external identifier.
    pub fn is_curated(&self) -> bool {
        self.external_id.is_some()
    }
}

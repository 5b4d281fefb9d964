#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use draft_career_paths::AppError;
use draft_career_paths::domain::entities::{Entrant, Placement, PlacementEntry};
use draft_career_paths::domain::sources::RegistrySource;
use serde_json::{Value, json};

pub fn entrant(
    name: &str,
    external_id: Option<i64>,
    draft_year: i32,
    overall_pick: u32,
) -> Entrant {
    Entrant::new(name, external_id, draft_year, overall_pick)
}

pub fn entry(season: &str, team: &str, league: &str) -> PlacementEntry {
    PlacementEntry {
        season: season.to_string(),
        team: team.to_string(),
        league: league.to_string(),
    }
}

pub fn placement(
    name: &str,
    external_id: i64,
    season: &str,
    team: &str,
    league: &str,
    draft_year: i32,
) -> Placement {
    Placement::from_entry(entry(season, team, league), name, external_id, draft_year)
}

pub fn write_json(path: &Path, value: &Value) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// Writes a profile export for `external_id` the way the placement source expects it.
pub fn write_profile(dir: &Path, external_id: i64, entries: &[(&str, &str, &str)]) {
    let rows: Vec<Value> = entries
        .iter()
        .map(|(season, team, league)| json!({ "Season": season, "Team": team, "League": league }))
        .collect();
    write_json(&dir.join(format!("{external_id}.json")), &Value::Array(rows));
}

/// Registry source returning a fixed draft history, or failing on demand.
pub struct StaticRegistrySource {
    entrants: Mutex<Option<Vec<Entrant>>>,
}

impl StaticRegistrySource {
    pub fn new(entrants: Vec<Entrant>) -> Self {
        Self {
            entrants: Mutex::new(Some(entrants)),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            entrants: Mutex::new(None),
        }
    }

    pub fn set(&self, entrants: Vec<Entrant>) {
        *self.entrants.lock().unwrap() = Some(entrants);
    }
}

#[async_trait]
impl RegistrySource for StaticRegistrySource {
    async fn fetch(&self) -> Result<Vec<Entrant>, AppError> {
        self.entrants
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::source_unavailable("Request timed out", json!({})))
    }
}

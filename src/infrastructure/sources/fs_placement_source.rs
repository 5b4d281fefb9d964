//! Placement source backed by pre-fetched player profile exports.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::json;
use tokio::fs;
use tracing::debug;

use crate::domain::entities::PlacementEntry;
use crate::domain::sources::PlacementSource;
use crate::error::AppError;

/// Reads `<dir>/<external_id>.json`, a JSON array of
/// `{"Season", "Team", "League"}` objects.
///
/// A missing file means the profile has no regular-season section.
pub struct FsPlacementSource {
    dir: PathBuf,
}

impl FsPlacementSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl PlacementSource for FsPlacementSource {
    async fn fetch(&self, external_id: i64) -> Result<Option<Vec<PlacementEntry>>, AppError> {
        let path = self.dir.join(format!("{external_id}.json"));

        let text = match fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No profile export for {}", external_id);
                return Ok(None);
            }
            Err(e) => {
                return Err(AppError::source_unavailable(
                    "Failed to read profile export",
                    json!({ "external_id": external_id, "reason": e.to_string() }),
                ));
            }
        };

        serde_json::from_str(&text).map(Some).map_err(|e| {
            AppError::source_unavailable(
                "Malformed profile export",
                json!({ "external_id": external_id, "reason": e.to_string() }),
            )
        })
    }
}

//! JSON file implementation of the placement batch repository.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::json;
use tokio::fs;
use tracing::{debug, warn};

use super::json_file::{read_json_optional, write_json_atomic};
use crate::domain::entities::{Placement, PlacementBatch};
use crate::domain::repositories::PlacementRepository;
use crate::error::AppError;

/// Directory holding the batches inside the data directory.
pub const BATCH_DIR: &str = "career_paths_per_draft_year";

const BATCH_PREFIX: &str = "career_paths_draft_";
const BATCH_EXT: &str = ".json";

/// One JSON file per draft year: `career_paths_draft_<year>.json`.
pub struct JsonPlacementRepository {
    dir: PathBuf,
}

impl JsonPlacementRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(BATCH_DIR))
    }

    pub fn batch_path(&self, draft_year: i32) -> PathBuf {
        self.dir.join(format!("{BATCH_PREFIX}{draft_year}{BATCH_EXT}"))
    }
}

/// Extracts the draft year from a batch file name.
fn batch_year(file_name: &str) -> Option<i32> {
    file_name
        .strip_prefix(BATCH_PREFIX)?
        .strip_suffix(BATCH_EXT)?
        .parse()
        .ok()
}

#[async_trait]
impl PlacementRepository for JsonPlacementRepository {
    async fn load_all(&self) -> Result<Vec<PlacementBatch>, AppError> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::storage(
                    "Failed to list placement batches",
                    json!({ "path": self.dir.display().to_string(), "reason": e.to_string() }),
                ));
            }
        };

        let mut batches = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let Some(draft_year) = batch_year(&name) else {
                if name.ends_with(BATCH_EXT) {
                    warn!("Ignoring unrecognised batch file {}", name);
                }
                continue;
            };

            let placements: Vec<Placement> =
                read_json_optional(&entry.path()).await?.unwrap_or_default();
            debug!("Loaded {} placements for draft {}", placements.len(), draft_year);
            batches.push(PlacementBatch {
                draft_year,
                placements,
            });
        }

        batches.sort_by_key(|b| b.draft_year);
        Ok(batches)
    }

    async fn replace_batch(
        &self,
        draft_year: i32,
        placements: &[Placement],
    ) -> Result<(), AppError> {
        write_json_atomic(&self.batch_path(draft_year), placements).await
    }
}

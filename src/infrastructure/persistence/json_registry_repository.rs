//! JSON file implementation of the registry repository.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::json_file::{read_json_optional, write_json_atomic};
use crate::domain::entities::Entrant;
use crate::domain::reconciler::validate_unique_keys;
use crate::domain::repositories::RegistryRepository;
use crate::error::AppError;

/// File name of the registry inside the data directory.
pub const REGISTRY_FILE: &str = "nba_draft_history.json";

/// Draft registry stored as a JSON array of entrant records.
pub struct JsonRegistryRepository {
    path: PathBuf,
}

impl JsonRegistryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses the standard file name inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(REGISTRY_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RegistryRepository for JsonRegistryRepository {
    async fn load(&self) -> Result<Vec<Entrant>, AppError> {
        let entrants: Vec<Entrant> = read_json_optional(&self.path).await?.unwrap_or_default();
        validate_unique_keys(&entrants)?;
        debug!("Loaded {} entrants from {}", entrants.len(), self.path.display());
        Ok(entrants)
    }

    async fn save(&self, entrants: &[Entrant]) -> Result<(), AppError> {
        write_json_atomic(&self.path, entrants).await?;
        debug!("Saved {} entrants to {}", entrants.len(), self.path.display());
        Ok(())
    }
}

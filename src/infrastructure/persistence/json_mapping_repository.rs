//! JSON file implementation of the country mapping repository.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::json_file::{read_json_optional, write_json_atomic};
use crate::domain::mapping_store::MappingStore;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// File name of the mapping cache inside the data directory.
pub const MAPPINGS_FILE: &str = "league_to_country_mappings.json";

/// Mapping cache stored as a JSON object keyed by league prefix.
///
/// Keys are written in sorted order because [`MappingStore`] is backed by a
/// `BTreeMap`.
pub struct JsonMappingRepository {
    path: PathBuf,
}

impl JsonMappingRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(MAPPINGS_FILE))
    }
}

#[async_trait]
impl MappingRepository for JsonMappingRepository {
    async fn load(&self) -> Result<MappingStore, AppError> {
        let store: MappingStore = read_json_optional(&self.path).await?.unwrap_or_default();
        debug!("Loaded {} country mappings", store.len());
        Ok(store)
    }

    async fn save(&self, store: &MappingStore) -> Result<(), AppError> {
        write_json_atomic(&self.path, store).await?;
        debug!("Saved {} country mappings", store.len());
        Ok(())
    }
}

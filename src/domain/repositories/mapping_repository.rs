//! Repository trait for the league-prefix country mapping cache.

use crate::domain::mapping_store::MappingStore;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for the [`MappingStore`].
///
/// Saved output must be sorted by prefix so repeated runs produce identical
/// files.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Loads the cache. A missing cache loads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on read or parse failures.
    async fn load(&self) -> Result<MappingStore, AppError>;

    /// Writes the whole cache.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on write failures.
    async fn save(&self, store: &MappingStore) -> Result<(), AppError>;
}

//! Repository trait for per-draft-year placement batches.

use crate::domain::entities::{Placement, PlacementBatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for placement batches, one unit per draft year.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlacementRepository: Send + Sync {
    /// Loads every stored batch, ordered by draft year.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on read or parse failures.
    async fn load_all(&self) -> Result<Vec<PlacementBatch>, AppError>;

    /// Replaces the batch for `draft_year` as a whole.
    ///
    /// A reader sees either the previous batch or the new one, never a mix.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on write failures.
    async fn replace_batch(
        &self,
        draft_year: i32,
        placements: &[Placement],
    ) -> Result<(), AppError>;
}

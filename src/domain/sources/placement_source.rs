//! Per-entrant placement source.

use crate::domain::entities::PlacementEntry;
use crate::error::AppError;
use async_trait::async_trait;

/// Fetches the season/team/league history of one entrant.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlacementSource: Send + Sync {
    /// # Returns
    ///
    /// - `Ok(Some(entries))` when the entrant has a placement history
    /// - `Ok(None)` when the source has no data section for the entrant
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SourceUnavailable`] when the fetch itself fails.
    /// Callers skip that entrant and keep going.
    async fn fetch(&self, external_id: i64) -> Result<Option<Vec<PlacementEntry>>, AppError>;
}

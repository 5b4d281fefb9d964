//! Authoritative draft registry source.

use crate::domain::entities::Entrant;
use crate::error::AppError;
use async_trait::async_trait;

/// Fetches the full draft history as one batch.
///
/// Every returned entrant has `external_id == None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrySource: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::SourceUnavailable`] if the source cannot be reached
    /// or its response cannot be understood. Callers treat this as fatal.
    async fn fetch(&self) -> Result<Vec<Entrant>, AppError>;
}

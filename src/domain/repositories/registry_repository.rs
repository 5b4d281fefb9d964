//! Repository trait for the persisted draft registry.

use crate::domain::entities::Entrant;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for the ordered draft registry.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonRegistryRepository`] - JSON file
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryRepository: Send + Sync {
    /// Loads the registry. A registry that was never written loads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the stored registry repeats a
    /// `(draft year, pick)` key.
    /// Returns [`AppError::Storage`] on read or parse failures.
    async fn load(&self) -> Result<Vec<Entrant>, AppError>;

    /// Replaces the stored registry with `entrants`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on write failures.
    async fn save(&self, entrants: &[Entrant]) -> Result<(), AppError>;
}

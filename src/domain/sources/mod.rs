//! External collaborator interfaces.
//!
//! - [`RegistrySource`] - Authoritative draft registry
//! - [`PlacementSource`] - Per-entrant placement history
//!
//! Implementations live in `crate::infrastructure::sources`.

pub mod placement_source;
pub mod registry_source;

pub use placement_source::PlacementSource;
pub use registry_source::RegistrySource;

#[cfg(test)]
pub use placement_source::MockPlacementSource;
#[cfg(test)]
pub use registry_source::MockRegistrySource;

//! Repository trait definitions for the domain layer.
//!
//! These traits abstract how the registry, the country mapping cache and the
//! placement batches are persisted. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`RegistryRepository`] - Draft registry
//! - [`MappingRepository`] - League prefix → country cache
//! - [`PlacementRepository`] - Placement batches per draft year
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod mapping_repository;
pub mod placement_repository;
pub mod registry_repository;

pub use mapping_repository::MappingRepository;
pub use placement_repository::PlacementRepository;
pub use registry_repository::RegistryRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
#[cfg(test)]
pub use placement_repository::MockPlacementRepository;
#[cfg(test)]
pub use registry_repository::MockRegistryRepository;

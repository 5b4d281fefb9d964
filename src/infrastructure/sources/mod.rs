//! Collaborator implementations.
//!
//! - [`HttpRegistrySource`] - Draft history over HTTP with retries
//! - [`FsPlacementSource`] - Placement histories from profile exports on disk

pub mod fs_placement_source;
pub mod http_registry_source;

pub use fs_placement_source::FsPlacementSource;
pub use http_registry_source::HttpRegistrySource;

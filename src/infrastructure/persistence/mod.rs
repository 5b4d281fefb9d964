//! JSON file repository implementations.
//!
//! Every document is written pretty-printed through a temporary sibling file
//! and an atomic rename.
//!
//! # Repositories
//!
//! - [`JsonRegistryRepository`] - Draft registry
//! - [`JsonMappingRepository`] - League prefix → country cache
//! - [`JsonPlacementRepository`] - Placement batches per draft year

pub mod json_file;
pub mod json_mapping_repository;
pub mod json_placement_repository;
pub mod json_registry_repository;

pub use json_mapping_repository::{JsonMappingRepository, MAPPINGS_FILE};
pub use json_placement_repository::{BATCH_DIR, JsonPlacementRepository};
pub use json_registry_repository::{JsonRegistryRepository, REGISTRY_FILE};

/// Default file name of the enriched career path table.
pub const CAREER_PATHS_FILE: &str = "career_paths.json";

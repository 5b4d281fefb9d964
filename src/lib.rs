//! # Draft Career Paths
//!
//! Builds and maintains a dataset of post-draft basketball career paths:
//! which league, and therefore which country, every drafted player was
//! playing in N years after their draft.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, pure pipeline steps, repository and source traits
//! - **Application Layer** ([`application`]) - Services orchestrating one pipeline step each
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file storage and upstream sources
//! - **Utilities** ([`utils`]) - Season timeline, league prefixes, ISO 3166 table
//!
//! ## Pipeline
//!
//! 1. Reconcile the draft registry with the league's draft history
//! 2. Refresh placement batches per draft year for curated entrants
//! 3. Resolve league prefixes to countries, join and filter into the
//!    career path table
//!
//! ## Quick Start
//!
//! ```bash
//! # First run only
//! cargo run -- init
//!
//! # Every season
//! cargo run -- reconcile
//! cargo run -- update --years 2024
//! cargo run -- build --summary
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CareerPathService, PlacementService, RegistryService, StatsService,
    };
    pub use crate::domain::entities::{CareerPathRow, Country, Entrant, Placement, PlacementEntry};
    pub use crate::domain::mapping_store::MappingStore;
    pub use crate::domain::reconciler::NoveltyRule;
    pub use crate::error::AppError;
}

//! Application layer services orchestrating the pipeline.
//!
//! Services consume repository and source traits and expose one method per
//! pipeline step, leaving presentation to the CLI.
//!
//! # Available Services
//!
//! - [`services::registry_service::RegistryService`] - Registry init and reconciliation
//! - [`services::placement_service::PlacementService`] - Per-draft-year placement refresh
//! - [`services::career_path_service::CareerPathService`] - Enriched career path build
//! - [`services::stats_service::StatsService`] - Country-per-year summary

pub mod services;

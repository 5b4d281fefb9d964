//! Domain layer containing entities, interfaces and the pure pipeline core.
//!
//! Nothing in this layer performs I/O. Repository and source traits define
//! the contracts the infrastructure layer implements.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Persistence trait definitions
//! - [`sources`] - External collaborator trait definitions
//! - [`mapping_store`] - League prefix → country cache
//! - [`country_resolver`] - Cache-first country resolution with code-list fallback
//! - [`reconciler`] - Registry reconciliation against a fresh fetch
//! - [`aggregator`] - Placement join, normalization, filtering and dedup
//!
//! # Data Flow
//!
//! 1. [`reconciler::reconcile`] keeps the draft registry current
//! 2. Placements are fetched per curated entrant and stored per draft year
//! 3. [`aggregator::aggregate`] joins placements with the registry, resolves
//!    countries via [`country_resolver::resolve`] and normalizes the timeline

pub mod aggregator;
pub mod country_resolver;
pub mod entities;
pub mod mapping_store;
pub mod reconciler;
pub mod repositories;
pub mod sources;

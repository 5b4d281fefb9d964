//! Infrastructure layer for storage and external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - JSON file repositories
//! - [`sources`] - Registry and placement collaborators

pub mod persistence;
pub mod sources;

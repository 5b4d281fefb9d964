//! Core domain entities representing the career path data model.
//!
//! Entities are plain data structures. The JSON field names match the
//! persisted dataset files so existing data loads unchanged.
//!
//! # Entity Types
//!
//! - [`Entrant`] - A drafted player in the draft registry
//! - [`Placement`] / [`PlacementEntry`] - A season/team/league assignment
//! - [`Country`] - ISO alpha-3 identity mapped from a league prefix
//! - [`CareerPathRow`] - A fully enriched output row

pub mod career_path;
pub mod country;
pub mod entrant;
pub mod placement;

pub use career_path::CareerPathRow;
pub use country::Country;
pub use entrant::Entrant;
pub use placement::{Placement, PlacementBatch, PlacementEntry};

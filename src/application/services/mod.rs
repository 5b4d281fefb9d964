//! Pipeline services for the application layer.

pub mod career_path_service;
pub mod placement_service;
pub mod registry_service;
pub mod stats_service;

pub use career_path_service::CareerPathService;
pub use placement_service::{PlacementService, SkippedEntrant, UpdateReport, YearUpdate};
pub use registry_service::{InitOutcome, ReconcileReport, RegistryService};
pub use stats_service::{CountrySummary, CountryYearCount, StatsService};

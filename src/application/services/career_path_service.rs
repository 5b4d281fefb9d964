//! Career path table build service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::aggregator::{Aggregation, aggregate};
use crate::domain::country_resolver::CountryCodeList;
use crate::domain::repositories::{MappingRepository, PlacementRepository, RegistryRepository};
use crate::error::AppError;

/// Joins stored placements with the registry and enriches them with country
/// identity.
pub struct CareerPathService<R, P, M, C>
where
    R: RegistryRepository,
    P: PlacementRepository,
    M: MappingRepository,
    C: CountryCodeList,
{
    registry_repository: Arc<R>,
    placement_repository: Arc<P>,
    mapping_repository: Arc<M>,
    codes: C,
}

impl<R, P, M, C> CareerPathService<R, P, M, C>
where
    R: RegistryRepository,
    P: PlacementRepository,
    M: MappingRepository,
    C: CountryCodeList,
{
    /// Creates a new career path service.
    pub fn new(
        registry_repository: Arc<R>,
        placement_repository: Arc<P>,
        mapping_repository: Arc<M>,
        codes: C,
    ) -> Self {
        Self {
            registry_repository,
            placement_repository,
            mapping_repository,
            codes,
        }
    }

    /// Builds the enriched career path table from everything in storage.
    ///
    /// The mapping store is saved after every build, whether or not it
    /// gained entries. Unresolved prefixes are logged and returned; their
    /// rows keep empty country fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if any stored document cannot be read or
    /// the mapping store cannot be written.
    /// Returns [`AppError::Validation`] if the stored registry is corrupt.
    pub async fn build(&self) -> Result<Aggregation, AppError> {
        let registry = self.registry_repository.load().await?;
        let batches = self.placement_repository.load_all().await?;
        let mut store = self.mapping_repository.load().await?;

        info!(
            "Building career paths from {} batches and {} registry entrants",
            batches.len(),
            registry.len()
        );

        let aggregation = aggregate(&batches, &registry, &mut store, &self.codes);

        self.mapping_repository.save(&store).await?;

        if !aggregation.unresolved.is_empty() {
            warn!(
                "No country found for league prefixes: {}",
                aggregation
                    .unresolved
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        Ok(aggregation)
    }
}

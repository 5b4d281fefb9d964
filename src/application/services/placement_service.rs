//! Per-draft-year placement refresh service.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::{Entrant, Placement};
use crate::domain::repositories::{PlacementRepository, RegistryRepository};
use crate::domain::sources::PlacementSource;
use crate::error::AppError;

/// Result of refreshing one draft year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearUpdate {
    pub draft_year: i32,
    /// Curated entrants that were queried.
    pub entrants: usize,
    pub placements: usize,
    /// Entrants for which the source had no placement history.
    pub without_data: usize,
}

/// An entrant whose fetch failed and was left out of its batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntrant {
    pub draft_year: i32,
    pub external_id: i64,
    pub name: String,
    pub reason: String,
}

/// Outcome of [`PlacementService::update_draft_years`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub updated: Vec<YearUpdate>,
    /// Requested years the registry knows nothing about.
    pub unknown_years: Vec<i32>,
    pub skipped: Vec<SkippedEntrant>,
}

/// Refreshes placement batches from the placement source.
///
/// Only curated entrants (those with an external identifier) are queried.
pub struct PlacementService<R, P, S>
where
    R: RegistryRepository,
    P: PlacementRepository,
    S: PlacementSource,
{
    registry_repository: Arc<R>,
    placement_repository: Arc<P>,
    source: Arc<S>,
}

impl<R, P, S> PlacementService<R, P, S>
where
    R: RegistryRepository,
    P: PlacementRepository,
    S: PlacementSource,
{
    /// Creates a new placement service.
    pub fn new(registry_repository: Arc<R>, placement_repository: Arc<P>, source: Arc<S>) -> Self {
        Self {
            registry_repository,
            placement_repository,
            source,
        }
    }

    /// Rebuilds the placement batch of every requested draft year.
    ///
    /// Years are processed in the order given. A year absent from the
    /// registry is reported and skipped without touching storage. Otherwise
    /// the year's batch is replaced as a whole, even when it ends up empty.
    /// A failed fetch skips that entrant only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] or [`AppError::Validation`] if the
    /// registry cannot be loaded, and [`AppError::Storage`] if a batch cannot
    /// be written. Batches already replaced stay replaced.
    pub async fn update_draft_years(&self, years: &[i32]) -> Result<UpdateReport, AppError> {
        let registry = self.registry_repository.load().await?;
        let known_years: BTreeSet<i32> = registry.iter().map(|e| e.draft_year).collect();

        let mut report = UpdateReport::default();

        for &year in years {
            if !known_years.contains(&year) {
                warn!("No registry entries for draft year {}, update skipped", year);
                report.unknown_years.push(year);
                continue;
            }

            let curated: Vec<&Entrant> = registry
                .iter()
                .filter(|e| e.draft_year == year && e.is_curated())
                .collect();
            info!(
                "Updating placements of {} curated entrants from draft {}",
                curated.len(),
                year
            );

            let mut update = YearUpdate {
                draft_year: year,
                entrants: curated.len(),
                placements: 0,
                without_data: 0,
            };
            let mut placements: Vec<Placement> = Vec::new();

            for entrant in curated {
                let Some(external_id) = entrant.external_id else {
                    continue;
                };

                match self.source.fetch(external_id).await {
                    Ok(Some(entries)) => {
                        placements.extend(entries.into_iter().map(|entry| {
                            Placement::from_entry(entry, &entrant.name, external_id, year)
                        }))
                    }
                    Ok(None) => {
                        info!(
                            "No placement history for {} (ID: {})",
                            entrant.name, external_id
                        );
                        update.without_data += 1;
                    }
                    Err(e) => {
                        warn!(
                            error = %e,
                            details = %e.details(),
                            "Skipping {} (ID: {})",
                            entrant.name,
                            external_id
                        );
                        report.skipped.push(SkippedEntrant {
                            draft_year: year,
                            external_id,
                            name: entrant.name.clone(),
                            reason: e.to_string(),
                        });
                    }
                }
            }

            self.placement_repository
                .replace_batch(year, &placements)
                .await?;

            update.placements = placements.len();
            info!("Draft {}: {} placements stored", year, update.placements);
            report.updated.push(update);
        }

        Ok(report)
    }
}

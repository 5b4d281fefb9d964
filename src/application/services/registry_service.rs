//! Draft registry initialisation and reconciliation service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::Entrant;
use crate::domain::reconciler::{NoveltyRule, new_entrants, reconcile};
use crate::domain::repositories::RegistryRepository;
use crate::domain::sources::RegistrySource;
use crate::error::AppError;

/// Outcome of [`RegistryService::initialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// A fresh registry with this many entrants was written.
    Written(usize),
    /// A registry with this many entrants already exists and was left alone.
    AlreadyPresent(usize),
}

/// Outcome of [`RegistryService::reconcile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    pub before: usize,
    pub added: Vec<Entrant>,
    pub after: usize,
}

/// Keeps the local draft registry in step with the authoritative source.
pub struct RegistryService<R: RegistryRepository, S: RegistrySource> {
    repository: Arc<R>,
    source: Arc<S>,
}

impl<R: RegistryRepository, S: RegistrySource> RegistryService<R, S> {
    /// Creates a new registry service.
    pub fn new(repository: Arc<R>, source: Arc<S>) -> Self {
        Self { repository, source }
    }

    /// Builds the registry from scratch with every external identifier empty.
    ///
    /// Only needed for the very first build. An existing non-empty registry
    /// holds curated identifiers and is kept unless `force` is set. With
    /// `force` the stored registry is not read at all, so a corrupt one can
    /// be replaced.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SourceUnavailable`] if the fetch fails.
    /// Returns [`AppError::Storage`] on read/write failures.
    /// Returns [`AppError::Validation`] if the stored registry is corrupt and
    /// `force` is not set.
    pub async fn initialize(&self, force: bool) -> Result<InitOutcome, AppError> {
        if !force {
            let existing = self.repository.load().await?;
            if !existing.is_empty() {
                warn!(
                    "Registry already holds {} entrants; not overwriting",
                    existing.len()
                );
                return Ok(InitOutcome::AlreadyPresent(existing.len()));
            }
        }

        let fetched = self.source.fetch().await?;
        let registry = reconcile(Vec::new(), &fetched, NoveltyRule::default());
        self.repository.save(&registry).await?;

        info!("Registry initialised with {} entrants", registry.len());
        Ok(InitOutcome::Written(registry.len()))
    }

    /// Appends newly drafted entrants to the registry.
    ///
    /// New entrants get an empty external identifier, to be curated by hand
    /// before their placements can be fetched. The registry is saved on every
    /// run; with nothing new the content is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SourceUnavailable`] if the fetch fails; nothing is
    /// written in that case.
    /// Returns [`AppError::Validation`] if the stored registry is corrupt.
    pub async fn reconcile(&self, rule: NoveltyRule) -> Result<ReconcileReport, AppError> {
        let existing = self.repository.load().await?;
        let fetched = self.source.fetch().await?;

        let before = existing.len();
        let added = new_entrants(&existing, &fetched, rule);
        let merged = reconcile(existing, &fetched, rule);
        self.repository.save(&merged).await?;

        info!(
            before,
            added = added.len(),
            after = merged.len(),
            rule = %rule,
            "Registry reconciled"
        );

        Ok(ReconcileReport {
            before,
            added,
            after: merged.len(),
        })
    }
}

mod common;

use std::sync::Arc;

use common::StaticRegistrySource;
use draft_career_paths::AppError;
use draft_career_paths::application::services::{
    CareerPathService, InitOutcome, PlacementService, RegistryService, StatsService,
};
use draft_career_paths::domain::entities::Country;
use draft_career_paths::domain::reconciler::NoveltyRule;
use draft_career_paths::domain::repositories::{MappingRepository, RegistryRepository};
use draft_career_paths::infrastructure::persistence::{
    JsonMappingRepository, JsonPlacementRepository, JsonRegistryRepository, MAPPINGS_FILE,
    REGISTRY_FILE,
};
use draft_career_paths::infrastructure::sources::FsPlacementSource;
use draft_career_paths::utils::iso3166::Iso3166;

fn draft_history() -> Vec<draft_career_paths::domain::entities::Entrant> {
    vec![
        common::entrant("Guard One", None, 2018, 1),
        common::entrant("Wing Two", None, 2018, 2),
        common::entrant("Big Three", None, 2017, 1),
    ]
}

#[tokio::test]
async fn test_full_pipeline() {
    let data = tempfile::tempdir().unwrap();
    let profiles = data.path().join("player_profiles");

    let registry_repo = Arc::new(JsonRegistryRepository::in_dir(data.path()));
    let placement_repo = Arc::new(JsonPlacementRepository::in_dir(data.path()));
    let mapping_repo = Arc::new(JsonMappingRepository::in_dir(data.path()));
    let source = Arc::new(StaticRegistrySource::new(draft_history()));

    // First run builds the registry without identifiers.
    let registry_service = RegistryService::new(registry_repo.clone(), source.clone());
    assert_eq!(
        registry_service.initialize(false).await.unwrap(),
        InitOutcome::Written(3)
    );

    // Manual curation.
    let mut registry = registry_repo.load().await.unwrap();
    for entrant in registry.iter_mut() {
        entrant.external_id = match entrant.name.as_str() {
            "Guard One" => Some(101),
            "Wing Two" => Some(102),
            _ => None,
        };
    }
    registry_repo.save(&registry).await.unwrap();

    common::write_profile(
        &profiles,
        101,
        &[
            ("18-19", "Sun City", "USA-NBA"),
            ("19-20", "Madrid", "ESP-ACB"),
            ("19-20", "Madrid", "EUROLEAGUE"),
        ],
    );

    let placement_service = PlacementService::new(
        registry_repo.clone(),
        placement_repo.clone(),
        Arc::new(FsPlacementSource::new(&profiles)),
    );
    let report = placement_service
        .update_draft_years(&[2018, 1990])
        .await
        .unwrap();

    assert_eq!(report.unknown_years, vec![1990]);
    assert_eq!(report.updated.len(), 1);
    assert_eq!(report.updated[0].entrants, 2);
    assert_eq!(report.updated[0].placements, 3);
    assert_eq!(report.updated[0].without_data, 1);

    let build_service = CareerPathService::new(
        registry_repo.clone(),
        placement_repo.clone(),
        mapping_repo.clone(),
        Iso3166,
    );
    let aggregation = build_service.build().await.unwrap();

    assert_eq!(aggregation.rows.len(), 3);
    assert_eq!(aggregation.rows[0].years_from_draft, 0);
    assert_eq!(aggregation.rows[0].country_alpha3.as_deref(), Some("USA"));
    assert_eq!(aggregation.rows[1].years_from_draft, 1);
    assert_eq!(aggregation.rows[1].country_name.as_deref(), Some("Spain"));
    assert_eq!(aggregation.rows[2].country_alpha3, None);
    assert!(aggregation.unresolved.contains("EUROLEAGUE"));

    let store = mapping_repo.load().await.unwrap();
    assert_eq!(store.get("ESP"), Some(&Country::new("ESP", "Spain")));
    assert!(!store.contains("EUROLEAGUE"));

    let summary = StatsService::country_counts_by_year(&aggregation.rows);
    assert_eq!(summary.counts.len(), 2);
    assert_eq!(summary.min_draft_year, Some(2018));
}

#[tokio::test]
async fn test_reconcile_is_idempotent_and_keeps_curation() {
    let data = tempfile::tempdir().unwrap();
    let registry_repo = Arc::new(JsonRegistryRepository::in_dir(data.path()));
    let source = Arc::new(StaticRegistrySource::new(draft_history()));
    let service = RegistryService::new(registry_repo.clone(), source.clone());

    service.initialize(false).await.unwrap();
    let mut registry = registry_repo.load().await.unwrap();
    registry[0].external_id = Some(9);
    registry_repo.save(&registry).await.unwrap();

    let mut next = draft_history();
    next.push(common::entrant("Rookie", Some(555), 2019, 3));
    source.set(next);

    let first = service.reconcile(NoveltyRule::YearAndPick).await.unwrap();
    let after_first = registry_repo.load().await.unwrap();
    let second = service.reconcile(NoveltyRule::YearAndPick).await.unwrap();
    let after_second = registry_repo.load().await.unwrap();

    assert_eq!(first.added.len(), 1);
    assert_eq!(first.added[0].external_id, None);
    assert!(second.added.is_empty());
    assert_eq!(after_first, after_second);
    assert_eq!(after_second[0].name, "Rookie");
    assert_eq!(after_second[1].external_id, Some(9));
}

#[tokio::test]
async fn test_unavailable_source_leaves_registry_untouched() {
    let data = tempfile::tempdir().unwrap();
    let registry_repo = Arc::new(JsonRegistryRepository::in_dir(data.path()));
    registry_repo
        .save(&[common::entrant("Kept", Some(1), 2020, 1)])
        .await
        .unwrap();
    let before = std::fs::read(registry_repo.path()).unwrap();

    let service = RegistryService::new(
        registry_repo.clone(),
        Arc::new(StaticRegistrySource::unavailable()),
    );
    let result = service.reconcile(NoveltyRule::YearAndPick).await;

    assert!(matches!(result, Err(AppError::SourceUnavailable { .. })));
    assert_eq!(std::fs::read(registry_repo.path()).unwrap(), before);
}

#[tokio::test]
async fn test_build_never_drops_manual_mappings() {
    let data = tempfile::tempdir().unwrap();
    common::write_json(
        &data.path().join(MAPPINGS_FILE),
        &serde_json::json!({ "EUROLEAGUE": { "ALPHA-3": "EUR", "NAME": "Europe" } }),
    );

    let service = CareerPathService::new(
        Arc::new(JsonRegistryRepository::in_dir(data.path())),
        Arc::new(JsonPlacementRepository::in_dir(data.path())),
        Arc::new(JsonMappingRepository::in_dir(data.path())),
        Iso3166,
    );
    service.build().await.unwrap();

    let store = JsonMappingRepository::in_dir(data.path()).load().await.unwrap();
    assert_eq!(store.get("EUROLEAGUE"), Some(&Country::new("EUR", "Europe")));
}

#[tokio::test]
async fn test_force_init_replaces_corrupt_registry() {
    let data = tempfile::tempdir().unwrap();
    common::write_json(
        &data.path().join(REGISTRY_FILE),
        &serde_json::json!([
            { "PLAYER_NAME": "A", "PROBALLERS_ID": 1, "SEASON": 2020, "OVERALL_PICK": 3 },
            { "PLAYER_NAME": "B", "PROBALLERS_ID": 2, "SEASON": 2020, "OVERALL_PICK": 3 }
        ]),
    );
    let registry_repo = Arc::new(JsonRegistryRepository::in_dir(data.path()));
    let service = RegistryService::new(
        registry_repo.clone(),
        Arc::new(StaticRegistrySource::new(draft_history())),
    );

    assert!(matches!(
        service.initialize(false).await,
        Err(AppError::Validation { .. })
    ));

    let outcome = service.initialize(true).await.unwrap();

    assert_eq!(outcome, InitOutcome::Written(3));
    let registry = registry_repo.load().await.unwrap();
    assert_eq!(registry.len(), 3);
    assert!(registry.iter().all(|e| e.external_id.is_none()));
}

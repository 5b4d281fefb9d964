use draft_career_paths::domain::entities::Country;
use draft_career_paths::domain::mapping_store::MappingStore;
use draft_career_paths::domain::repositories::MappingRepository;
use draft_career_paths::infrastructure::persistence::{JsonMappingRepository, MAPPINGS_FILE};
use serde_json::json;

#[tokio::test]
async fn test_missing_store_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonMappingRepository::in_dir(dir.path());

    assert!(repo.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_store_is_written_as_sorted_object() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonMappingRepository::in_dir(dir.path());

    let mut store = MappingStore::new();
    store.insert_if_absent("USA", Country::new("USA", "United States"));
    store.insert_if_absent("FR", Country::new("FRA", "France"));

    repo.save(&store).await.unwrap();

    let text = std::fs::read_to_string(dir.path().join(MAPPINGS_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        json!({
            "FR": { "ALPHA-3": "FRA", "NAME": "France" },
            "USA": { "ALPHA-3": "USA", "NAME": "United States" }
        })
    );
    assert!(text.find("\"FR\"").unwrap() < text.find("\"USA\"").unwrap());
}

#[tokio::test]
async fn test_manual_entries_survive_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(MAPPINGS_FILE),
        r#"{ "EUROLEAGUE": { "ALPHA-3": "EUR", "NAME": "Europe" } }"#,
    )
    .unwrap();
    let repo = JsonMappingRepository::in_dir(dir.path());

    let store = repo.load().await.unwrap();
    repo.save(&store).await.unwrap();
    let reloaded = repo.load().await.unwrap();

    assert_eq!(
        reloaded.get("EUROLEAGUE"),
        Some(&Country::new("EUR", "Europe"))
    );
}

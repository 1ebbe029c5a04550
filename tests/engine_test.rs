//! Integration tests for the content migration engine
//!
//! These run the full coordinator loop against in-memory object stores:
//! listing, concurrent batch copies, outcome merging, and persistence of
//! the results document.

use ferry::adapters::store::{MemoryStore, StoredObject};
use ferry::config::MigrationConfig;
use ferry::core::migrate::MigrationCoordinator;
use ferry::core::state::ResultStore;
use ferry::domain::{OrgId, RunMode};
use std::sync::Arc;
use tempfile::TempDir;

fn migration_config(results_dir: &TempDir, page_size: usize) -> MigrationConfig {
    MigrationConfig {
        page_size,
        results_dir: results_dir.path().to_string_lossy().into_owned(),
        ..MigrationConfig::default()
    }
}

fn seeded_stores(org: &OrgId, count: usize) -> (Arc<MemoryStore>, Arc<MemoryStore>) {
    let source = Arc::new(MemoryStore::new());
    let destination = Arc::new(MemoryStore::new());
    for i in 0..count {
        source.insert(
            &org.source_bucket(),
            &format!("content/object-{i:04}.json"),
            StoredObject::from_body(format!("{{\"id\":{i}}}")),
        );
    }
    (source, destination)
}

#[tokio::test]
async fn test_full_migration_pages_through_entire_bucket() {
    let org = OrgId::new("acme").unwrap();
    let results = TempDir::new().unwrap();
    let (source, destination) = seeded_stores(&org, 250);

    let mut coordinator = MigrationCoordinator::new(
        source.clone(),
        destination.clone(),
        "platform-content",
        &migration_config(&results, 100),
    );

    let status = coordinator.execute(&org).await.expect("migration failed");

    // 250 objects at page size 100 means pages of 100, 100, and 50
    assert_eq!(source.list_calls(), 3);
    assert_eq!(status.success_count(), 250);
    assert_eq!(status.failed_count(), 0);
    assert!(status.is_clean());

    // Every object landed under the org prefix in the shared bucket
    let copied = destination.keys("platform-content");
    assert_eq!(copied.len(), 250);
    assert!(copied.iter().all(|k| k.starts_with("acme/content/")));
}

#[tokio::test]
async fn test_partial_final_page_is_not_followed_by_another_list() {
    // The absence of a continuation token is the only stop signal, so
    // 150 objects at page size 100 takes exactly two list calls.
    let org = OrgId::new("acme").unwrap();
    let results = TempDir::new().unwrap();
    let (source, destination) = seeded_stores(&org, 150);

    let mut coordinator = MigrationCoordinator::new(
        source.clone(),
        destination,
        "platform-content",
        &migration_config(&results, 100),
    );

    let status = coordinator.execute(&org).await.expect("migration failed");

    assert_eq!(status.success_count(), 150);
    assert_eq!(source.list_calls(), 2);
}

#[tokio::test]
async fn test_copy_failures_do_not_abort_the_run() {
    let org = OrgId::new("acme").unwrap();
    let results = TempDir::new().unwrap();
    let (source, destination) = seeded_stores(&org, 250);

    // Sprinkle failures across different pages
    source.fail_get("content/object-0007.json");
    source.fail_get("content/object-0123.json");
    source.fail_get("content/object-0249.json");

    let mut coordinator = MigrationCoordinator::new(
        source.clone(),
        destination.clone(),
        "platform-content",
        &migration_config(&results, 100),
    );

    let status = coordinator.execute(&org).await.expect("migration failed");

    assert_eq!(status.success_count(), 247);
    assert_eq!(status.failed_count(), 3);
    assert!(!status.is_clean());

    // Every listed key is accounted for exactly once
    assert_eq!(status.attempted(), 250);
    assert!(status
        .failed
        .iter()
        .any(|k| k.as_str() == "content/object-0123.json"));

    // The failed objects were not written to the destination
    assert!(destination
        .object("platform-content", "acme/content/object-0007.json")
        .is_none());
}

#[tokio::test]
async fn test_results_document_is_persisted() {
    let org = OrgId::new("acme").unwrap();
    let results = TempDir::new().unwrap();
    let (source, destination) = seeded_stores(&org, 10);
    source.fail_put("content/object-0003.json");

    let config = migration_config(&results, 100);
    let mut coordinator =
        MigrationCoordinator::new(source, destination, "platform-content", &config);

    coordinator.execute(&org).await.expect("migration failed");

    let store = ResultStore::new(config.results_dir.clone());
    let path = store.document_path(&org, RunMode::Migrate);
    assert!(path.exists());
    assert!(path.ends_with("migrate-acme.results.json"));

    let loaded = store.load(&org, RunMode::Migrate).expect("load failed");
    assert_eq!(loaded.org, org);
    assert_eq!(loaded.success_count(), 9);
    assert_eq!(loaded.failed_count(), 1);
}

#[tokio::test]
async fn test_listing_failure_aborts_without_results_document() {
    let org = OrgId::new("acme").unwrap();
    let results = TempDir::new().unwrap();
    let (source, destination) = seeded_stores(&org, 10);
    source.fail_listing();

    let config = migration_config(&results, 100);
    let mut coordinator =
        MigrationCoordinator::new(source, destination, "platform-content", &config);

    let err = coordinator.execute(&org).await.expect_err("should abort");
    assert!(err.to_string().contains("Listing"));

    // A run that never enumerated its objects leaves no document behind
    let store = ResultStore::new(config.results_dir);
    assert!(store.load(&org, RunMode::Migrate).is_err());
}

#[tokio::test]
async fn test_empty_org_persists_empty_status() {
    let org = OrgId::new("empty-org").unwrap();
    let results = TempDir::new().unwrap();
    let source = Arc::new(MemoryStore::new());
    let destination = Arc::new(MemoryStore::new());

    let config = migration_config(&results, 100);
    let mut coordinator =
        MigrationCoordinator::new(source, destination, "platform-content", &config);

    let status = coordinator.execute(&org).await.expect("migration failed");
    assert_eq!(status.attempted(), 0);

    let loaded = ResultStore::new(config.results_dir)
        .load(&org, RunMode::Migrate)
        .expect("load failed");
    assert_eq!(loaded.attempted(), 0);
}

#[tokio::test]
async fn test_object_bodies_survive_the_copy() {
    let org = OrgId::new("acme").unwrap();
    let results = TempDir::new().unwrap();
    let source = Arc::new(MemoryStore::new());
    let destination = Arc::new(MemoryStore::new());

    let mut object = StoredObject::from_body("<html>home</html>");
    object.content_type = Some("text/html".to_string());
    object
        .metadata
        .insert("site".to_string(), "www".to_string());
    source.insert(&org.source_bucket(), "pages/index.html", object);

    let mut coordinator = MigrationCoordinator::new(
        source,
        destination.clone(),
        "platform-content",
        &migration_config(&results, 100),
    );
    coordinator.execute(&org).await.expect("migration failed");

    let copied = destination
        .object("platform-content", "acme/pages/index.html")
        .expect("object missing");
    assert_eq!(copied.body, b"<html>home</html>");
    assert_eq!(copied.content_type.as_deref(), Some("text/html"));
    assert_eq!(copied.metadata.get("site").map(String::as_str), Some("www"));
}

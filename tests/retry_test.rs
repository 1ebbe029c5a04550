//! Integration tests for the retry flow
//!
//! A retry run re-attempts exactly the keys the previous migrate run
//! recorded as failed and writes its own results document, so a migration
//! can be driven to completion over several invocations.

use ferry::adapters::store::{MemoryStore, StoredObject};
use ferry::config::MigrationConfig;
use ferry::core::migrate::{MigrationCoordinator, RetryDriver};
use ferry::core::state::ResultStore;
use ferry::domain::{FerryError, OrgId, RunMode};
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
async fn test_retry_reattempts_only_the_failed_keys() {
    let org = OrgId::new("acme").unwrap();
    let results = TempDir::new().unwrap();
    let (source, destination) = seeded_stores(&org, 10);
    let config = migration_config(&results, 100);

    // First pass: three objects fail
    for key in [
        "content/object-0002.json",
        "content/object-0005.json",
        "content/object-0008.json",
    ] {
        source.fail_get(key);
    }

    let mut coordinator = MigrationCoordinator::new(
        source.clone(),
        destination.clone(),
        "platform-content",
        &config,
    );
    let migrate_status = coordinator.execute(&org).await.expect("migration failed");
    assert_eq!(migrate_status.failed_count(), 3);

    // The outage clears for two of the three
    source.clear_get_failure("content/object-0002.json");
    source.clear_get_failure("content/object-0008.json");

    let source_lists_before = source.list_calls();
    let mut driver = RetryDriver::new(
        source.clone(),
        destination.clone(),
        "platform-content",
        &config,
    );
    let retry_status = driver.execute(&org).await.expect("retry failed");

    // Retry works from the document, never from a fresh listing
    assert_eq!(source.list_calls(), source_lists_before);

    assert_eq!(retry_status.attempted(), 3);
    assert_eq!(retry_status.success_count(), 2);
    assert_eq!(retry_status.failed_count(), 1);
    assert!(retry_status
        .failed
        .iter()
        .any(|k| k.as_str() == "content/object-0005.json"));

    // The recovered objects are now in the destination
    assert!(destination
        .object("platform-content", "acme/content/object-0002.json")
        .is_some());
    assert!(destination
        .object("platform-content", "acme/content/object-0005.json")
        .is_none());
}

#[tokio::test]
async fn test_retry_writes_its_own_results_document() {
    let org = OrgId::new("acme").unwrap();
    let results = TempDir::new().unwrap();
    let (source, destination) = seeded_stores(&org, 4);
    let config = migration_config(&results, 100);

    source.fail_get("content/object-0001.json");
    let mut coordinator = MigrationCoordinator::new(
        source.clone(),
        destination.clone(),
        "platform-content",
        &config,
    );
    coordinator.execute(&org).await.expect("migration failed");

    source.clear_get_failure("content/object-0001.json");
    let mut driver = RetryDriver::new(source, destination, "platform-content", &config);
    driver.execute(&org).await.expect("retry failed");

    let store = ResultStore::new(config.results_dir);

    // The migrate document is left untouched for auditing
    let migrate_doc = store.load(&org, RunMode::Migrate).expect("load failed");
    assert_eq!(migrate_doc.failed_count(), 1);

    let retry_doc = store.load(&org, RunMode::Retry).expect("load failed");
    assert_eq!(retry_doc.success_count(), 1);
    assert_eq!(retry_doc.failed_count(), 0);
}

#[tokio::test]
async fn test_retry_without_results_document_is_an_error() {
    let org = OrgId::new("acme").unwrap();
    let results = TempDir::new().unwrap();
    let (source, destination) = seeded_stores(&org, 1);

    let mut driver = RetryDriver::new(
        source,
        destination,
        "platform-content",
        &migration_config(&results, 100),
    );

    match driver.execute(&org).await {
        Err(FerryError::StatusNotFound { org }) => assert_eq!(org.as_str(), "acme"),
        other => panic!("expected StatusNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_retry_with_no_recorded_failures_persists_empty_status() {
    let org = OrgId::new("acme").unwrap();
    let results = TempDir::new().unwrap();
    let (source, destination) = seeded_stores(&org, 3);
    let config = migration_config(&results, 100);

    let mut coordinator = MigrationCoordinator::new(
        source.clone(),
        destination.clone(),
        "platform-content",
        &config,
    );
    let clean = coordinator.execute(&org).await.expect("migration failed");
    assert!(clean.is_clean());

    let mut driver = RetryDriver::new(source, destination, "platform-content", &config);
    let status = driver.execute(&org).await.expect("retry failed");
    assert_eq!(status.attempted(), 0);

    let retry_doc = ResultStore::new(config.results_dir)
        .load(&org, RunMode::Retry)
        .expect("load failed");
    assert!(retry_doc.is_clean());
}

#[tokio::test]
async fn test_retry_processes_failures_in_page_sized_chunks() {
    let org = OrgId::new("acme").unwrap();
    let results = TempDir::new().unwrap();
    let (source, destination) = seeded_stores(&org, 7);
    let config = migration_config(&results, 3);

    // Fail everything on the first pass
    for i in 0..7 {
        source.fail_get(&format!("content/object-{i:04}.json"));
    }
    let mut coordinator = MigrationCoordinator::new(
        source.clone(),
        destination.clone(),
        "platform-content",
        &config,
    );
    let migrate_status = coordinator.execute(&org).await.expect("migration failed");
    assert_eq!(migrate_status.failed_count(), 7);

    for i in 0..7 {
        source.clear_get_failure(&format!("content/object-{i:04}.json"));
    }

    let mut driver = RetryDriver::new(source, destination.clone(), "platform-content", &config);
    let status = driver.execute(&org).await.expect("retry failed");

    // 7 failures at chunk size 3 all settle, regardless of chunk shape
    assert_eq!(status.success_count(), 7);
    assert_eq!(destination.keys("platform-content").len(), 7);
}

//! Retry of a prior run's failures
//!
//! Drives the retry pipeline: Idle -> LoadFailures -> Copying(chunk) ->
//! [next chunk while any remain] -> Completed -> Persisted.

use crate::adapters::store::ObjectStore;
use crate::config::MigrationConfig;
use crate::core::migrate::batch::BatchRunner;
use crate::core::migrate::copier::Copier;
use crate::core::state::ResultStore;
use crate::domain::ids::OrgId;
use crate::domain::status::{MigrationStatus, RunMode};
use crate::domain::Result;
use std::sync::Arc;
use std::time::Duration;

/// Replays a prior migrate run's failed keys in bounded chunks
///
/// Chunks run strictly one after another (never concurrently with each
/// other) to bound total concurrent connections; the chunk bound is the
/// same as the listing page size. Each retry invocation is a single fresh
/// pass: the new status is accumulated from scratch and never merged with
/// or deduplicated against the original run's document.
pub struct RetryDriver {
    runner: BatchRunner,
    results: ResultStore,
    chunk_size: usize,
}

impl RetryDriver {
    /// Wire up the retry components
    pub fn new(
        source: Arc<dyn ObjectStore>,
        destination: Arc<dyn ObjectStore>,
        dest_bucket: impl Into<String>,
        config: &MigrationConfig,
    ) -> Self {
        let copier = Arc::new(Copier::new(
            source,
            destination,
            dest_bucket,
            Duration::from_secs(config.copy_timeout_secs),
        ));

        Self {
            runner: BatchRunner::new(copier),
            results: ResultStore::new(config.results_dir.clone()),
            chunk_size: config.page_size,
        }
    }

    /// Execute the retry run and persist its status document
    ///
    /// An empty failed list executes zero chunks and persists a status
    /// with empty success and failed sequences.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`FerryError::StatusNotFound`](crate::domain::FerryError::StatusNotFound)
    /// when no prior migrate document exists ("nothing to retry"), or
    /// [`FerryError::Persistence`](crate::domain::FerryError::Persistence)
    /// if the final write fails.
    pub async fn execute(&mut self, org: &OrgId) -> Result<MigrationStatus> {
        let failed = self.results.load_failures(org)?;
        tracing::info!(org = %org, count = failed.len(), "Retrying failed copies");

        let mut status = MigrationStatus::new(org.clone());
        for chunk in failed.chunks(self.chunk_size) {
            let outcomes = self.runner.run_batch(org, chunk.to_vec()).await;
            status.record_batch(outcomes);
        }
        println!();

        self.results.persist(org, RunMode::Retry, &status)?;

        tracing::info!(
            org = %org,
            success = status.success_count(),
            failed = status.failed_count(),
            "Retry completed"
        );
        Ok(status)
    }
}

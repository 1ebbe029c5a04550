//! Full-run coordinator
//!
//! Drives the linear pipeline of a full migration run:
//! Idle -> Listing -> Copying(batch) -> [Listing again while a next token
//! exists] -> Completed -> Persisted.
//!
//! The coordinator is the single owner of the evolving [`MigrationStatus`]:
//! copy tasks return outcomes, and only the coordinator merges them after
//! each batch barrier. The listing cursor for batch N+1 is read only after
//! batch N has fully settled, so there is no speculative look-ahead.

use crate::adapters::store::ObjectStore;
use crate::config::MigrationConfig;
use crate::core::migrate::batch::BatchRunner;
use crate::core::migrate::copier::Copier;
use crate::core::migrate::lister::Lister;
use crate::core::state::ResultStore;
use crate::domain::ids::{OrgId, PageToken};
use crate::domain::status::{MigrationStatus, RunMode};
use crate::domain::Result;
use std::sync::Arc;
use std::time::Duration;

/// Coordinates one full content migration run for an org
pub struct MigrationCoordinator {
    lister: Lister,
    runner: BatchRunner,
    results: ResultStore,
}

impl MigrationCoordinator {
    /// Wire up the engine components for one run
    pub fn new(
        source: Arc<dyn ObjectStore>,
        destination: Arc<dyn ObjectStore>,
        dest_bucket: impl Into<String>,
        config: &MigrationConfig,
    ) -> Self {
        let copier = Arc::new(Copier::new(
            source.clone(),
            destination,
            dest_bucket,
            Duration::from_secs(config.copy_timeout_secs),
        ));

        Self {
            lister: Lister::new(source, config.page_size),
            runner: BatchRunner::new(copier),
            results: ResultStore::new(config.results_dir.clone()),
        }
    }

    /// Execute the full run and persist its status document
    ///
    /// Repeatedly lists a page of keys, copies the page as one concurrent
    /// batch, and merges the settled outcomes, until the listing returns
    /// no continuation token. The status document is persisted exactly
    /// once, at completion.
    ///
    /// # Errors
    ///
    /// Returns [`FerryError::Listing`](crate::domain::FerryError::Listing)
    /// if any listing call fails (no status document is written), or
    /// [`FerryError::Persistence`](crate::domain::FerryError::Persistence)
    /// if the final write fails. Individual copy failures never surface
    /// here; they land in the status's failed list.
    pub async fn execute(&mut self, org: &OrgId) -> Result<MigrationStatus> {
        tracing::info!(org = %org, "Starting content migration");

        let mut status = MigrationStatus::new(org.clone());
        let mut token: Option<PageToken> = None;

        loop {
            let page = self.lister.list_page(org, token.as_ref()).await?;
            let outcomes = self.runner.run_batch(org, page.keys).await;
            status.record_batch(outcomes);

            match page.next_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }
        println!();

        self.results.persist(org, RunMode::Migrate, &status)?;

        tracing::info!(
            org = %org,
            success = status.success_count(),
            failed = status.failed_count(),
            "Content migration completed"
        );
        Ok(status)
    }
}

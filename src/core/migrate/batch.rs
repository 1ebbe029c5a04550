//! Concurrent batch execution with a settle barrier

use crate::core::migrate::copier::Copier;
use crate::domain::ids::{ObjectKey, OrgId};
use crate::domain::status::CopyOutcome;
use std::io::Write;
use std::sync::Arc;

/// Runs one batch of copies concurrently and waits for all to settle
///
/// One copy task is launched per key; the batch size is bounded by the
/// listing page size, which naturally caps concurrency. `run_batch` is a
/// synchronization barrier: it returns only after every launched copy has
/// settled, and no subsequent batch starts before that. A per-copy timeout
/// converts only that copy into a failure; sibling copies are unaffected.
///
/// Outcomes are returned for the coordinator to merge; the copy tasks
/// never touch the aggregate status, so no lock is needed on it.
pub struct BatchRunner {
    copier: Arc<Copier>,
    processed: usize,
}

impl BatchRunner {
    /// Create a runner around a copier
    pub fn new(copier: Arc<Copier>) -> Self {
        Self {
            copier,
            processed: 0,
        }
    }

    /// Copy every key in the batch concurrently and return all outcomes
    ///
    /// Outcomes come back in input order. After the batch settles, the
    /// cumulative processed count is reported as a progress line and a
    /// tracing event.
    pub async fn run_batch(&mut self, org: &OrgId, keys: Vec<ObjectKey>) -> Vec<CopyOutcome> {
        let copies = keys
            .into_iter()
            .map(|key| self.copier.copy_object(org, key));
        let outcomes = futures::future::join_all(copies).await;

        self.processed += outcomes.len();
        self.report_progress();

        outcomes
    }

    /// Objects processed so far across all batches
    pub fn processed(&self) -> usize {
        self.processed
    }

    fn report_progress(&self) {
        tracing::info!(processed = self.processed, "Batch settled");
        print!("\rCopied {} objects.", self.processed);
        let _ = std::io::stdout().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::{MemoryStore, StoredObject};
    use std::time::Duration;

    fn org() -> OrgId {
        OrgId::new("acme").unwrap()
    }

    fn key(s: &str) -> ObjectKey {
        ObjectKey::new(s).unwrap()
    }

    fn runner_over(source: Arc<MemoryStore>, dest: Arc<MemoryStore>) -> BatchRunner {
        BatchRunner::new(Arc::new(Copier::new(
            source,
            dest,
            "dest-content",
            Duration::from_secs(5),
        )))
    }

    fn seeded(keys: &[&str]) -> Arc<MemoryStore> {
        let store = MemoryStore::new();
        for k in keys {
            store.insert("acme-content", k, StoredObject::from_body(b"x".to_vec()));
        }
        Arc::new(store)
    }

    #[tokio::test]
    async fn test_run_batch_settles_every_key() {
        let source = seeded(&["a.html", "b.html", "c.html"]);
        let dest = Arc::new(MemoryStore::new());
        let mut runner = runner_over(source, dest);

        let outcomes = runner
            .run_batch(&org(), vec![key("a.html"), key("b.html"), key("c.html")])
            .await;

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(CopyOutcome::is_success));
        assert_eq!(runner.processed(), 3);
    }

    #[tokio::test]
    async fn test_one_failure_leaves_siblings_unaffected() {
        let source = seeded(&["a.html", "b.html", "c.html"]);
        source.fail_get("b.html");
        let dest = Arc::new(MemoryStore::new());
        let mut runner = runner_over(source, dest);

        let outcomes = runner
            .run_batch(&org(), vec![key("a.html"), key("b.html"), key("c.html")])
            .await;

        assert!(outcomes[0].is_success());
        assert!(!outcomes[1].is_success());
        assert!(outcomes[2].is_success());
    }

    #[tokio::test]
    async fn test_outcomes_preserve_input_order() {
        let source = seeded(&["a.html", "b.html"]);
        let dest = Arc::new(MemoryStore::new());
        let mut runner = runner_over(source, dest);

        let outcomes = runner
            .run_batch(&org(), vec![key("b.html"), key("a.html")])
            .await;

        assert_eq!(outcomes[0].key().as_str(), "b.html");
        assert_eq!(outcomes[1].key().as_str(), "a.html");
    }

    #[tokio::test]
    async fn test_processed_count_is_cumulative() {
        let source = seeded(&["a.html", "b.html", "c.html"]);
        let dest = Arc::new(MemoryStore::new());
        let mut runner = runner_over(source, dest);

        runner.run_batch(&org(), vec![key("a.html")]).await;
        assert_eq!(runner.processed(), 1);
        runner
            .run_batch(&org(), vec![key("b.html"), key("c.html")])
            .await;
        assert_eq!(runner.processed(), 3);
    }

    #[tokio::test]
    async fn test_empty_batch_settles_immediately() {
        let source = seeded(&[]);
        let dest = Arc::new(MemoryStore::new());
        let mut runner = runner_over(source, dest);

        let outcomes = runner.run_batch(&org(), vec![]).await;
        assert!(outcomes.is_empty());
        assert_eq!(runner.processed(), 0);
    }
}

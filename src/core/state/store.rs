//! Status document persistence
//!
//! Writes a run's [`MigrationStatus`] to a JSON file keyed by org and run
//! mode, and loads a prior migrate run's failures to drive a retry. The
//! document schema is stable:
//!
//! ```json
//! { "org": "acme", "success": ["a.html"], "failed": ["b.html"] }
//! ```
//!
//! stored at `{results_dir}/migrate-{org}.results.json` for a full run and
//! `{results_dir}/retry-{org}.results.json` for a retry run.

use crate::domain::errors::FerryError;
use crate::domain::ids::{ObjectKey, OrgId};
use crate::domain::status::{MigrationStatus, RunMode};
use crate::domain::Result;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File-backed store for run status documents
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    /// Create a store writing into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the status document for an org and mode
    pub fn document_path(&self, org: &OrgId, mode: RunMode) -> PathBuf {
        self.dir.join(format!("{}-{}.results.json", mode, org))
    }

    /// Write a run's status document, overwriting any prior document of
    /// the same org and mode
    ///
    /// # Errors
    ///
    /// Returns [`FerryError::Persistence`]. This is fatal: the operator's
    /// view of the run is lost and the run must be re-verified manually.
    pub fn persist(&self, org: &OrgId, mode: RunMode, status: &MigrationStatus) -> Result<()> {
        let path = self.document_path(org, mode);
        let json = serde_json::to_string_pretty(status)
            .map_err(|e| FerryError::Persistence(e.to_string()))?;

        write_durably(&path, json.as_bytes())
            .map_err(|e| FerryError::Persistence(format!("{}: {}", path.display(), e)))?;

        tracing::info!(
            org = %org,
            mode = %mode,
            path = %path.display(),
            success = status.success_count(),
            failed = status.failed_count(),
            "Status document persisted"
        );
        Ok(())
    }

    /// Load the status document for an org and mode
    ///
    /// # Errors
    ///
    /// Returns [`FerryError::StatusNotFound`] if no document exists, or a
    /// serialization error if the document is unreadable.
    pub fn load(&self, org: &OrgId, mode: RunMode) -> Result<MigrationStatus> {
        let path = self.document_path(org, mode);
        if !path.exists() {
            return Err(FerryError::StatusNotFound {
                org: org.as_str().to_string(),
            });
        }

        let contents = std::fs::read_to_string(&path)?;
        let status = serde_json::from_str(&contents)?;
        Ok(status)
    }

    /// Load the failed keys of the most recent migrate run
    ///
    /// # Errors
    ///
    /// Returns [`FerryError::StatusNotFound`] when no migrate document
    /// exists; the caller surfaces this as "nothing to retry".
    pub fn load_failures(&self, org: &OrgId) -> Result<Vec<ObjectKey>> {
        Ok(self.load(org, RunMode::Migrate)?.failed)
    }
}

fn write_durably(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

//! Run status and per-object outcomes
//!
//! This module defines the persisted record of one run's success/failure
//! partition of attempted keys, and the outcome value each copy produces.
//!
//! The status document has a stable external schema:
//!
//! ```json
//! { "org": "acme", "success": ["a.html"], "failed": ["b.html"] }
//! ```

use crate::domain::ids::{ObjectKey, OrgId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Run mode, used to key the persisted status document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// A full migration run driven by listing
    Migrate,
    /// A retry run driven by a prior run's failed list
    Retry,
}

impl RunMode {
    /// Returns the mode as the string used in document file names
    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Migrate => "migrate",
            RunMode::Retry => "retry",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "migrate" => Ok(RunMode::Migrate),
            "retry" => Ok(RunMode::Retry),
            other => Err(format!(
                "Invalid run mode '{other}'. Must be 'migrate' or 'retry'"
            )),
        }
    }
}

/// Outcome of one attempted object copy
///
/// Exactly one outcome is produced per attempted key. Failures carry the
/// key as data; they are never raised as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The object was copied to the destination
    Success(ObjectKey),
    /// The copy failed at fetch, write, or timeout
    Failure(ObjectKey),
}

impl CopyOutcome {
    /// Returns the key this outcome is about
    pub fn key(&self) -> &ObjectKey {
        match self {
            CopyOutcome::Success(key) | CopyOutcome::Failure(key) => key,
        }
    }

    /// Whether the copy succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Success(_))
    }
}

/// Persisted record of one run's success/failure partition
///
/// Invariant: for a single run, `success` and `failed` are disjoint and
/// their union is exactly the set of keys attempted in that run. The status
/// is created empty at run start, mutated only by appending whole-batch
/// results after each batch settles, and persisted exactly once at run
/// completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationStatus {
    /// Organization this run belongs to
    pub org: OrgId,

    /// Keys copied successfully, in settlement order
    pub success: Vec<ObjectKey>,

    /// Keys that failed to copy, in settlement order
    pub failed: Vec<ObjectKey>,
}

impl MigrationStatus {
    /// Create an empty status at run start
    pub fn new(org: OrgId) -> Self {
        Self {
            org,
            success: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Merge a settled batch's outcomes into the status
    ///
    /// This is the only mutation point. The coordinator that owns the
    /// status calls it after each batch barrier; the copy tasks themselves
    /// never touch the aggregate.
    pub fn record_batch(&mut self, outcomes: Vec<CopyOutcome>) {
        for outcome in outcomes {
            match outcome {
                CopyOutcome::Success(key) => self.success.push(key),
                CopyOutcome::Failure(key) => self.failed.push(key),
            }
        }
    }

    /// Number of successful copies
    pub fn success_count(&self) -> usize {
        self.success.len()
    }

    /// Number of failed copies
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Total number of attempted keys
    pub fn attempted(&self) -> usize {
        self.success.len() + self.failed.len()
    }

    /// Whether the run completed with no failures
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

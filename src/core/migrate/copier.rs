//! Single-object copy between stores

use crate::adapters::store::ObjectStore;
use crate::domain::errors::StoreError;
use crate::domain::ids::{ObjectKey, OrgId};
use crate::domain::status::CopyOutcome;
use std::sync::Arc;
use std::time::Duration;

/// Transfers one object's body and metadata from source to destination
///
/// The source object is never mutated or deleted. Failures at fetch,
/// write, or timeout are captured as a [`CopyOutcome::Failure`] carrying
/// the key; `copy_object` never returns an error.
pub struct Copier {
    source: Arc<dyn ObjectStore>,
    destination: Arc<dyn ObjectStore>,
    dest_bucket: String,
    timeout: Duration,
}

impl Copier {
    /// Create a copier between a source and destination store
    pub fn new(
        source: Arc<dyn ObjectStore>,
        destination: Arc<dyn ObjectStore>,
        dest_bucket: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            source,
            destination,
            dest_bucket: dest_bucket.into(),
            timeout,
        }
    }

    /// Copy one object, reporting the result as a value
    ///
    /// Fetches from `{org}-content/{key}` and writes unchanged to the
    /// destination bucket at `{org}/{key}`. The whole fetch/write pair
    /// runs under the configured timeout; expiry is an ordinary failure.
    pub async fn copy_object(&self, org: &OrgId, key: ObjectKey) -> CopyOutcome {
        match tokio::time::timeout(self.timeout, self.transfer(org, &key)).await {
            Ok(Ok(())) => CopyOutcome::Success(key),
            Ok(Err(e)) => {
                tracing::warn!(org = %org, key = %key, error = %e, "Copy failed");
                CopyOutcome::Failure(key)
            }
            Err(_) => {
                tracing::warn!(
                    org = %org,
                    key = %key,
                    timeout_secs = self.timeout.as_secs(),
                    "Copy timed out"
                );
                CopyOutcome::Failure(key)
            }
        }
    }

    async fn transfer(&self, org: &OrgId, key: &ObjectKey) -> Result<(), StoreError> {
        let object = self.source.get(&org.source_bucket(), key).await?;
        self.destination
            .put(&self.dest_bucket, &org.destination_key(key), object)
            .await
    }
}

//! Paginated listing of an org's source content

use crate::adapters::store::{ObjectPage, ObjectStore};
use crate::domain::errors::FerryError;
use crate::domain::ids::{OrgId, PageToken};
use crate::domain::Result;
use std::sync::Arc;

/// Pages through the source store's keys for one org
///
/// Each call returns strictly the next page after the given continuation
/// token; an absent `next_token` on the returned page is the sole
/// termination signal.
pub struct Lister {
    store: Arc<dyn ObjectStore>,
    page_size: usize,
}

impl Lister {
    /// Create a lister over the source store
    pub fn new(store: Arc<dyn ObjectStore>, page_size: usize) -> Self {
        Self { store, page_size }
    }

    /// Fetch the next page of object keys for `org`
    ///
    /// # Errors
    ///
    /// Returns [`FerryError::Listing`] when the underlying listing call
    /// does not report success. This is fatal to the run: the caller must
    /// abort without persisting a status document.
    pub async fn list_page(
        &self,
        org: &OrgId,
        continuation: Option<&PageToken>,
    ) -> Result<ObjectPage> {
        let bucket = org.source_bucket();
        let page = self
            .store
            .list(&bucket, self.page_size, continuation)
            .await
            .map_err(|e| FerryError::Listing(e.to_string()))?;

        tracing::debug!(
            org = %org,
            keys = page.keys.len(),
            has_next = page.next_token.is_some(),
            "Listed source page"
        );

        Ok(page)
    }
}

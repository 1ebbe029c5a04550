//! Object store abstraction
//!
//! This module defines the trait the migration engine consumes. The engine
//! only ever needs three capabilities: paginated listing, fetching one
//! object, and writing one object. Backends implement this trait; the
//! engine stays generic so tests can drive it with an in-memory store.

use crate::domain::errors::StoreError;
use crate::domain::ids::{ObjectKey, PageToken};
use async_trait::async_trait;
use std::collections::HashMap;

/// One page of a bucket listing
#[derive(Debug, Clone)]
pub struct ObjectPage {
    /// Keys in this page, in listing order
    pub keys: Vec<ObjectKey>,

    /// Cursor for the next page; `None` is the sole termination signal
    pub next_token: Option<PageToken>,
}

/// An object's body and metadata, as fetched from a store
///
/// The copier moves this value unchanged from source to destination.
#[derive(Debug, Clone, Default)]
pub struct StoredObject {
    /// Object body
    pub body: Vec<u8>,

    /// Content type, if the store reported one
    pub content_type: Option<String>,

    /// Content length, if the store reported one
    pub content_length: Option<i64>,

    /// Custom metadata attached to the object
    pub metadata: HashMap<String, String>,
}

impl StoredObject {
    /// Create an object carrying just a body
    pub fn from_body(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            ..Default::default()
        }
    }
}

/// Abstract store capability consumed by the Lister and Copier
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List up to `page_size` keys from `bucket`, starting after
    /// `continuation`
    ///
    /// Each call returns strictly the next page after the given token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying listing call does not report
    /// success.
    async fn list(
        &self,
        bucket: &str,
        page_size: usize,
        continuation: Option<&PageToken>,
    ) -> Result<ObjectPage, StoreError>;

    /// Fetch an object's body and metadata
    ///
    /// # Errors
    ///
    /// Returns an error on non-success status or transport failure.
    async fn get(&self, bucket: &str, key: &ObjectKey) -> Result<StoredObject, StoreError>;

    /// Write an object under `key`, overwriting any existing object
    ///
    /// # Errors
    ///
    /// Returns an error on non-success status or transport failure.
    async fn put(&self, bucket: &str, key: &str, object: StoredObject) -> Result<(), StoreError>;
}

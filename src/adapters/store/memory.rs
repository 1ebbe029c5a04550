//! In-memory object store
//!
//! A fully functional [`ObjectStore`] kept in process memory. The engine's
//! test suites drive it instead of a live S3 endpoint: test setups can
//! script per-key failures and listing failures, and assert on what was
//! written.
//!
//! Listing order is lexicographic by key. The continuation token is the
//! last key of the returned page; the next call resumes strictly after it,
//! which gives the same page semantics as ListObjectsV2.

use crate::adapters::store::traits::{ObjectPage, ObjectStore, StoredObject};
use crate::domain::errors::StoreError;
use crate::domain::ids::{ObjectKey, PageToken};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::Bound;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    /// bucket -> key -> object
    buckets: HashMap<String, BTreeMap<String, StoredObject>>,
    /// Keys whose get should fail
    failing_gets: HashSet<String>,
    /// Keys whose put should fail
    failing_puts: HashSet<String>,
    /// When set, every list call fails
    fail_listing: bool,
    /// Number of list calls made
    list_calls: usize,
}

/// In-memory object store with scriptable failures
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object into a bucket
    pub fn insert(&self, bucket: &str, key: &str, object: StoredObject) {
        let mut inner = self.lock();
        inner
            .buckets
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), object);
    }

    /// Make every `get` for `key` fail
    pub fn fail_get(&self, key: &str) {
        self.lock().failing_gets.insert(key.to_string());
    }

    /// Stop failing `get` for `key`
    pub fn clear_get_failure(&self, key: &str) {
        self.lock().failing_gets.remove(key);
    }

    /// Make every `put` whose destination key is `key` fail
    pub fn fail_put(&self, key: &str) {
        self.lock().failing_puts.insert(key.to_string());
    }

    /// Make every subsequent list call fail
    pub fn fail_listing(&self) {
        self.lock().fail_listing = true;
    }

    /// Number of list calls made so far
    pub fn list_calls(&self) -> usize {
        self.lock().list_calls
    }

    /// Fetch a stored object for assertions, if present
    pub fn object(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.lock()
            .buckets
            .get(bucket)
            .and_then(|b| b.get(key))
            .cloned()
    }

    /// All keys currently in a bucket, in listing order
    pub fn keys(&self, bucket: &str) -> Vec<String> {
        self.lock()
            .buckets
            .get(bucket)
            .map(|b| b.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn list(
        &self,
        bucket: &str,
        page_size: usize,
        continuation: Option<&PageToken>,
    ) -> Result<ObjectPage, StoreError> {
        let mut inner = self.lock();
        inner.list_calls += 1;

        if inner.fail_listing {
            return Err(StoreError::List {
                bucket: bucket.to_string(),
                message: "listing disabled by test".to_string(),
            });
        }

        let Some(objects) = inner.buckets.get(bucket) else {
            return Ok(ObjectPage {
                keys: Vec::new(),
                next_token: None,
            });
        };

        let lower = match continuation {
            Some(token) => Bound::Excluded(token.as_str().to_string()),
            None => Bound::Unbounded,
        };

        let keys: Vec<String> = objects
            .range((lower, Bound::Unbounded))
            .take(page_size)
            .map(|(k, _)| k.clone())
            .collect();

        let remaining = match keys.last() {
            Some(last) => objects
                .range((Bound::Excluded(last.clone()), Bound::Unbounded))
                .next()
                .is_some(),
            None => false,
        };

        let next_token = if remaining {
            keys.last().map(|k| PageToken::new(k.clone()))
        } else {
            None
        };

        let keys = keys
            .into_iter()
            .map(ObjectKey::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|message| StoreError::List {
                bucket: bucket.to_string(),
                message,
            })?;

        Ok(ObjectPage { keys, next_token })
    }

    async fn get(&self, bucket: &str, key: &ObjectKey) -> Result<StoredObject, StoreError> {
        let inner = self.lock();

        if inner.failing_gets.contains(key.as_str()) {
            return Err(StoreError::Get {
                key: key.as_str().to_string(),
                message: "get disabled by test".to_string(),
            });
        }

        inner
            .buckets
            .get(bucket)
            .and_then(|b| b.get(key.as_str()))
            .cloned()
            .ok_or_else(|| StoreError::Get {
                key: key.as_str().to_string(),
                message: format!("no such key in bucket '{bucket}'"),
            })
    }

    async fn put(&self, bucket: &str, key: &str, object: StoredObject) -> Result<(), StoreError> {
        let mut inner = self.lock();

        if inner.failing_puts.contains(key) {
            return Err(StoreError::Put {
                key: key.to_string(),
                message: "put disabled by test".to_string(),
            });
        }

        inner
            .buckets
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), object);
        Ok(())
    }
}

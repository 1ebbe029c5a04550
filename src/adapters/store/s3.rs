//! S3-compatible object store backend
//!
//! Implements [`ObjectStore`] over `aws-sdk-s3`. Works against AWS S3 and
//! any S3-compatible store that supports ListObjectsV2 (a custom endpoint
//! plus path-style addressing covers the usual suspects).

use crate::adapters::store::traits::{ObjectPage, ObjectStore, StoredObject};
use crate::config::StoreConfig;
use crate::domain::errors::StoreError;
use crate::domain::ids::{ObjectKey, PageToken};
use async_trait::async_trait;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use secrecy::ExposeSecret;

/// Object store backed by an S3-compatible service
pub struct S3Store {
    client: aws_sdk_s3::Client,
}

impl S3Store {
    /// Build a store client from connection settings
    ///
    /// Credentials come from the config when set, otherwise from the
    /// ambient AWS credential chain (environment, profile, instance role).
    pub async fn new(config: &StoreConfig) -> Self {
        let shared = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared)
            .force_path_style(config.force_path_style);

        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        if let (Some(access_key), Some(secret_key)) =
            (&config.access_key_id, &config.secret_access_key)
        {
            builder = builder.credentials_provider(Credentials::new(
                access_key,
                secret_key.expose_secret().as_ref(),
                None,
                None,
                "ferry-config",
            ));
        }

        Self {
            client: aws_sdk_s3::Client::from_conf(builder.build()),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn list(
        &self,
        bucket: &str,
        page_size: usize,
        continuation: Option<&PageToken>,
    ) -> Result<ObjectPage, StoreError> {
        let resp = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .max_keys(page_size as i32)
            .set_continuation_token(continuation.map(|t| t.as_str().to_string()))
            .send()
            .await
            .map_err(|e| StoreError::List {
                bucket: bucket.to_string(),
                message: e.to_string(),
            })?;

        let mut keys = Vec::new();
        for object in resp.contents() {
            if let Some(key) = object.key() {
                match ObjectKey::new(key) {
                    Ok(key) => keys.push(key),
                    Err(message) => {
                        return Err(StoreError::List {
                            bucket: bucket.to_string(),
                            message,
                        })
                    }
                }
            }
        }

        Ok(ObjectPage {
            keys,
            next_token: resp.next_continuation_token().map(PageToken::new),
        })
    }

    async fn get(&self, bucket: &str, key: &ObjectKey) -> Result<StoredObject, StoreError> {
        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key.as_str())
            .send()
            .await
            .map_err(|e| StoreError::Get {
                key: key.as_str().to_string(),
                message: e.to_string(),
            })?;

        let content_type = resp.content_type().map(str::to_string);
        let content_length = resp.content_length();
        let metadata = resp.metadata().cloned().unwrap_or_default();

        let body = resp
            .body
            .collect()
            .await
            .map_err(|e| StoreError::Get {
                key: key.as_str().to_string(),
                message: e.to_string(),
            })?
            .into_bytes()
            .to_vec();

        Ok(StoredObject {
            body,
            content_type,
            content_length,
            metadata,
        })
    }

    async fn put(&self, bucket: &str, key: &str, object: StoredObject) -> Result<(), StoreError> {
        let mut request = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(object.body));

        if let Some(content_type) = object.content_type {
            request = request.content_type(content_type);
        }
        if let Some(content_length) = object.content_length {
            request = request.content_length(content_length);
        }
        if !object.metadata.is_empty() {
            request = request.set_metadata(Some(object.metadata));
        }

        request.send().await.map_err(|e| StoreError::Put {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        Ok(())
    }
}

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::ObjectRef;

/// Object storage as seen by the pipeline: attribute lookup, body read and
/// body write. Both pipeline stages share one implementation per deployment.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// User-defined attributes of an object, without fetching its body.
    async fn head_metadata(
        &self,
        object: &ObjectRef,
    ) -> Result<HashMap<String, String>, MediaStoreError>;

    async fn fetch(&self, object: &ObjectRef) -> Result<Vec<u8>, MediaStoreError>;

    async fn put(
        &self,
        object: &ObjectRef,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), MediaStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MediaStoreError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("store configuration: {0}")]
    Configuration(String),
}

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use bytes::Bytes;

use crate::application::ports::{MediaStore, MediaStoreError};
use crate::domain::ObjectRef;

#[derive(Debug, Clone)]
struct StoredObject {
    data: Bytes,
    content_type: String,
    metadata: HashMap<String, String>,
}

/// In-memory store for local runs and tests. Keys span buckets.
#[derive(Default)]
pub struct MemoryMediaStore {
    objects: RwLock<HashMap<(String, String), StoredObject>>,
}

impl MemoryMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object with user-defined attributes, the way an uploading
    /// application would.
    pub fn insert_object(
        &self,
        object: &ObjectRef,
        data: Bytes,
        content_type: &str,
        metadata: HashMap<String, String>,
    ) {
        self.objects
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                (object.bucket().to_string(), object.key().to_string()),
                StoredObject {
                    data,
                    content_type: content_type.to_string(),
                    metadata,
                },
            );
    }

    pub fn data_of(&self, object: &ObjectRef) -> Option<Bytes> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(object.bucket().to_string(), object.key().to_string()))
            .map(|stored| stored.data.clone())
    }

    pub fn content_type_of(&self, object: &ObjectRef) -> Option<String> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(object.bucket().to_string(), object.key().to_string()))
            .map(|stored| stored.content_type.clone())
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .map(|(_, key)| key.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl MediaStore for MemoryMediaStore {
    async fn head_metadata(
        &self,
        object: &ObjectRef,
    ) -> Result<HashMap<String, String>, MediaStoreError> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(object.bucket().to_string(), object.key().to_string()))
            .map(|stored| stored.metadata.clone())
            .ok_or_else(|| MediaStoreError::NotFound(object.uri()))
    }

    async fn fetch(&self, object: &ObjectRef) -> Result<Vec<u8>, MediaStoreError> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(object.bucket().to_string(), object.key().to_string()))
            .map(|stored| stored.data.to_vec())
            .ok_or_else(|| MediaStoreError::NotFound(object.uri()))
    }

    async fn put(
        &self,
        object: &ObjectRef,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), MediaStoreError> {
        self.insert_object(object, data, content_type, HashMap::new());
        Ok(())
    }
}

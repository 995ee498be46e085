use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as StorePath;
use object_store::{Attribute, Attributes, GetOptions, ObjectStore, PutOptions, PutPayload};

use crate::application::ports::{MediaStore, MediaStoreError};
use crate::domain::ObjectRef;

/// S3 adapter over the `object_store` crate. One inner store per bucket,
/// built lazily; credentials come from the environment.
pub struct S3MediaStore {
    region: Option<String>,
    endpoint: Option<String>,
    stores: RwLock<HashMap<String, Arc<dyn ObjectStore>>>,
}

impl S3MediaStore {
    pub fn new(region: Option<String>, endpoint: Option<String>) -> Self {
        Self {
            region,
            endpoint,
            stores: RwLock::new(HashMap::new()),
        }
    }

    fn store_for(&self, bucket: &str) -> Result<Arc<dyn ObjectStore>, MediaStoreError> {
        if let Some(store) = self
            .stores
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(bucket)
        {
            return Ok(Arc::clone(store));
        }

        let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket);
        if let Some(region) = &self.region {
            builder = builder.with_region(region);
        }
        if let Some(endpoint) = &self.endpoint {
            builder = builder.with_endpoint(endpoint).with_allow_http(true);
        }
        let store: Arc<dyn ObjectStore> = Arc::new(
            builder
                .build()
                .map_err(|e| MediaStoreError::Configuration(e.to_string()))?,
        );

        self.stores
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(bucket.to_string(), Arc::clone(&store));
        Ok(store)
    }
}

fn read_error(object: &ObjectRef, error: object_store::Error) -> MediaStoreError {
    match error {
        object_store::Error::NotFound { .. } => MediaStoreError::NotFound(object.uri()),
        other => MediaStoreError::ReadFailed(other.to_string()),
    }
}

#[async_trait::async_trait]
impl MediaStore for S3MediaStore {
    async fn head_metadata(
        &self,
        object: &ObjectRef,
    ) -> Result<HashMap<String, String>, MediaStoreError> {
        let store = self.store_for(object.bucket())?;
        let path = StorePath::from(object.key());
        let options = GetOptions {
            head: true,
            ..Default::default()
        };

        let result = store
            .get_opts(&path, options)
            .await
            .map_err(|e| read_error(object, e))?;

        let mut metadata = HashMap::new();
        for (attribute, value) in result.attributes.iter() {
            if let Attribute::Metadata(name) = attribute {
                metadata.insert(name.to_string(), value.to_string());
            }
        }
        Ok(metadata)
    }

    async fn fetch(&self, object: &ObjectRef) -> Result<Vec<u8>, MediaStoreError> {
        let store = self.store_for(object.bucket())?;
        let path = StorePath::from(object.key());

        let result = store
            .get(&path)
            .await
            .map_err(|e| read_error(object, e))?;
        let bytes = result
            .bytes()
            .await
            .map_err(|e| MediaStoreError::ReadFailed(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    async fn put(
        &self,
        object: &ObjectRef,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), MediaStoreError> {
        let store = self.store_for(object.bucket())?;
        let path = StorePath::from(object.key());

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        store
            .put_opts(&path, PutPayload::from(data), options)
            .await
            .map_err(|e| MediaStoreError::WriteFailed(e.to_string()))?;
        Ok(())
    }
}

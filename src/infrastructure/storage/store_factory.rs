use std::sync::Arc;

use crate::application::ports::{MediaStore, MediaStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::memory_media_store::MemoryMediaStore;
use super::s3_media_store::S3MediaStore;

pub struct MediaStoreFactory;

impl MediaStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn MediaStore>, MediaStoreError> {
        match settings.provider {
            StorageProviderSetting::Memory => Ok(Arc::new(MemoryMediaStore::new())),
            StorageProviderSetting::S3 => Ok(Arc::new(S3MediaStore::new(
                settings.region.clone(),
                settings.endpoint.clone(),
            ))),
        }
    }
}

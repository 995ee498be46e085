mod memory_media_store;
mod s3_media_store;
mod store_factory;

pub use memory_media_store::MemoryMediaStore;
pub use s3_media_store::S3MediaStore;
pub use store_factory::MediaStoreFactory;

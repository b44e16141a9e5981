//! Object-storage half of the storage adapter.
//!
//! Handlers and services only see [`ObjectStore`]. Production uses
//! [`S3Store`]; local development without a bucket and the test suites use
//! [`MemoryStore`].

mod memory;
mod s3;

pub use memory::MemoryStore;
pub use s3::{S3Settings, S3Store};

/// Errors raised by object-store backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to upload object '{key}': {message}")]
    Upload { key: String, message: String },

    #[error("Failed to delete object '{key}': {message}")]
    Delete { key: String, message: String },
}

/// A bucket of publicly readable objects addressed by key.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `body` under `key`, replacing any existing object.
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), StorageError>;

    /// Remove the object under `key`. Deleting a missing key succeeds.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Base URL under which stored objects are publicly served
    /// (`<base>/<key>`), without a trailing slash.
    fn public_base_url(&self) -> &str;
}

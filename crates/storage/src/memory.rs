use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tokio::sync::RwLock;

use crate::{ObjectStore, StorageError};

/// An object held by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
}

/// In-process [`ObjectStore`].
///
/// Counts every call so tests can assert which storage operations a request
/// performed, and can be told to fail deletes.
#[derive(Debug)]
pub struct MemoryStore {
    objects: RwLock<HashMap<String, StoredObject>>,
    public_base_url: String,
    put_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    fail_deletes: AtomicBool,
}

impl MemoryStore {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
            put_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            fail_deletes: AtomicBool::new(false),
        }
    }

    /// Fetch a stored object by key.
    pub async fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.read().await.get(key).cloned()
    }

    /// Number of objects currently stored.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Number of `put` calls made so far, successful or not.
    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }

    /// Number of `delete` calls made so far, successful or not.
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent `delete` fail.
    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl ObjectStore for MemoryStore {
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), StorageError> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        let object = StoredObject {
            body,
            content_type: content_type.to_string(),
        };
        self.objects.write().await.insert(key.to_string(), object);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StorageError::Delete {
                key: key.to_string(),
                message: "delete disabled".to_string(),
            });
        }
        self.objects.write().await.remove(key);
        Ok(())
    }

    fn public_base_url(&self) -> &str {
        &self.public_base_url
    }
}

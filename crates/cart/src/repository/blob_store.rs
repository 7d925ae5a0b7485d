use crate::abstract_trait::cart::BlobStoreTrait;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct InMemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStoreTrait for InMemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let blobs = self.blobs.read().await;
        Ok(blobs.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> Result<(), RepositoryError> {
        debug!("Writing blob {key} ({} bytes)", value.len());
        self.blobs.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        debug!("Removing blob {key}");
        self.blobs.write().await.remove(key);
        Ok(())
    }
}

use crate::model::CartItem;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynBlobStore = Arc<dyn BlobStoreTrait + Send + Sync>;

/// Device-scoped key/value storage. The cart only ever reads and writes whole blobs.
#[async_trait]
pub trait BlobStoreTrait {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn put(&self, key: &str, value: String) -> Result<(), RepositoryError>;
    async fn remove(&self, key: &str) -> Result<(), RepositoryError>;
}

pub type DynCartRepository = Arc<dyn CartRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CartRepositoryTrait {
    async fn persist_cart_items(
        &self,
        actor_id: &str,
        items: &[CartItem],
    ) -> Result<(), RepositoryError>;
    async fn load_cart_items(&self, actor_id: &str) -> Result<Vec<CartItem>, RepositoryError>;
}

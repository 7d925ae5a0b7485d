use crate::{
    abstract_trait::cart::{CartRepositoryTrait, DynBlobStore},
    model::CartItem,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::{error, info};

/// Stores each shopper's lines as one JSON blob under `cart:{actor_id}`.
#[derive(Clone)]
pub struct CartRepository {
    store: DynBlobStore,
}

impl CartRepository {
    pub fn new(store: DynBlobStore) -> Self {
        Self { store }
    }

    fn key(actor_id: &str) -> String {
        format!("cart:{actor_id}")
    }
}

#[async_trait]
impl CartRepositoryTrait for CartRepository {
    async fn persist_cart_items(
        &self,
        actor_id: &str,
        items: &[CartItem],
    ) -> Result<(), RepositoryError> {
        let key = Self::key(actor_id);

        if items.is_empty() {
            return self.store.remove(&key).await;
        }

        let payload = serde_json::to_string(items).map_err(|e| {
            error!("❌ Failed to serialize cart for {actor_id}: {e:?}");
            RepositoryError::Serialization(e)
        })?;

        self.store.put(&key, payload).await?;

        info!("💾 Persisted {} cart lines for {actor_id}", items.len());
        Ok(())
    }

    async fn load_cart_items(&self, actor_id: &str) -> Result<Vec<CartItem>, RepositoryError> {
        let Some(payload) = self.store.get(&Self::key(actor_id)).await? else {
            return Ok(Vec::new());
        };

        serde_json::from_str::<Vec<CartItem>>(&payload).map_err(|e| {
            error!("❌ Failed to deserialize cart for {actor_id}: {e:?}");
            RepositoryError::Serialization(e)
        })
    }
}

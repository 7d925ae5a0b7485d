use crate::{
    abstract_trait::order::repository::OrderQueryRepositoryTrait, model::Order,
    repository::OrderStore,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::info;

#[derive(Clone)]
pub struct OrderQueryRepository {
    store: OrderStore,
}

impl OrderQueryRepository {
    pub fn new(store: OrderStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = self.store.orders.read().await;
        info!("🔍 Fetched {} orders", orders.len());
        Ok(orders.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, RepositoryError> {
        let orders = self.store.orders.read().await;
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    async fn find_by_buyer(&self, buyer_id: &str) -> Result<Vec<Order>, RepositoryError> {
        let orders = self.store.orders.read().await;
        Ok(orders
            .iter()
            .filter(|o| o.buyer_id == buyer_id)
            .cloned()
            .collect())
    }
}

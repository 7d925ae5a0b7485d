use crate::model::Order;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

/// Reads return orders in insertion order.
#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, RepositoryError>;
    async fn find_by_buyer(&self, buyer_id: &str) -> Result<Vec<Order>, RepositoryError>;
}

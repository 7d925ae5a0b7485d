use crate::model::Order;
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

/// Checks and edits one stored order. An `Err` rejects the edit and leaves the order as it was.
pub type OrderMutator = Box<dyn FnOnce(&mut Order) -> Result<(), ServiceError> + Send>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn append(&self, order: Order) -> Result<Order, RepositoryError>;
    /// Applies `mutator` to the stored order while holding the write lock. `Ok(None)` when
    /// no order has that id.
    async fn update(&self, id: &str, mutator: OrderMutator) -> Result<Option<Order>, ServiceError>;
}

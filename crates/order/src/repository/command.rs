use crate::{
    abstract_trait::order::repository::{OrderCommandRepositoryTrait, OrderMutator},
    model::Order,
    repository::OrderStore,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct OrderCommandRepository {
    store: OrderStore,
}

impl OrderCommandRepository {
    pub fn new(store: OrderStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn append(&self, order: Order) -> Result<Order, RepositoryError> {
        let mut orders = self.store.orders.write().await;

        if orders.iter().any(|o| o.id == order.id) {
            error!("❌ Order {} already exists", order.id);
            return Err(RepositoryError::AlreadyExists(format!("order {}", order.id)));
        }

        info!("🧾 Order {} stored for buyer {}", order.id, order.buyer_id);
        orders.push(order.clone());
        Ok(order)
    }

    async fn update(&self, id: &str, mutator: OrderMutator) -> Result<Option<Order>, ServiceError> {
        let mut orders = self.store.orders.write().await;

        let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };

        let mut draft = order.clone();
        if let Err(e) = mutator(&mut draft) {
            warn!("Order {id} left unchanged: {e}");
            return Err(e);
        }

        *order = draft;
        Ok(Some(order.clone()))
    }
}

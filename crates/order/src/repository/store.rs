use crate::model::Order;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared in-memory order log, append-only apart from status updates.
#[derive(Clone, Debug, Default)]
pub struct OrderStore {
    pub(crate) orders: Arc<RwLock<Vec<Order>>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

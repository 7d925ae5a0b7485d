use shared::model::Product;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared in-memory product table. Insertion order is the catalog order.
#[derive(Clone, Debug, Default)]
pub struct ProductStore {
    pub(crate) products: Arc<RwLock<Vec<Product>>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

use shared::model::{User, Vendor};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Debug, Default)]
pub struct UserStore {
    pub(crate) users: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct VendorStore {
    pub(crate) vendors: Arc<RwLock<Vec<Vendor>>>,
}

impl VendorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

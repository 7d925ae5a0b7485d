use crate::{
    abstract_trait::vendor::repository::{VendorCommandRepositoryTrait, VendorQueryRepositoryTrait},
    repository::VendorStore,
};
use async_trait::async_trait;
use shared::{
    errors::RepositoryError,
    model::{Vendor, VendorStatus},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct VendorQueryRepository {
    store: VendorStore,
}

impl VendorQueryRepository {
    pub fn new(store: VendorStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl VendorQueryRepositoryTrait for VendorQueryRepository {
    async fn find_all(&self) -> Result<Vec<Vendor>, RepositoryError> {
        let vendors = self.store.vendors.read().await;
        Ok(vendors.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Vendor>, RepositoryError> {
        let vendors = self.store.vendors.read().await;
        Ok(vendors.iter().find(|v| v.id == id).cloned())
    }
}

#[derive(Clone)]
pub struct VendorCommandRepository {
    store: VendorStore,
}

impl VendorCommandRepository {
    pub fn new(store: VendorStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl VendorCommandRepositoryTrait for VendorCommandRepository {
    async fn insert_vendor(&self, vendor: Vendor) -> Result<Vendor, RepositoryError> {
        let mut vendors = self.store.vendors.write().await;

        if vendors.iter().any(|v| v.id == vendor.id) {
            error!("❌ Vendor {} already exists", vendor.id);
            return Err(RepositoryError::AlreadyExists(format!("vendor {}", vendor.id)));
        }

        info!("🏪 Vendor {} ({}) stored", vendor.id, vendor.business_name);
        vendors.push(vendor.clone());
        Ok(vendor)
    }

    async fn update_status(&self, id: &str, status: VendorStatus) -> Result<Vendor, RepositoryError> {
        let mut vendors = self.store.vendors.write().await;
        let vendor = vendors
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(RepositoryError::NotFound)?;

        vendor.status = status;
        Ok(vendor.clone())
    }
}

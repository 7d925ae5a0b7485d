use async_trait::async_trait;
use shared::{errors::ServiceError, model::Product};
use std::sync::Arc;

pub type DynCatalogClient = Arc<dyn CatalogClientTrait + Send + Sync>;

/// Read access to the product catalog, used to decide which order lines belong to a vendor.
#[async_trait]
pub trait CatalogClientTrait {
    async fn find_products_by_vendor(&self, vendor_id: &str) -> Result<Vec<Product>, ServiceError>;
}

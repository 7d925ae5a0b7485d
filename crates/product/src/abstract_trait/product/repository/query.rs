use async_trait::async_trait;
use shared::{errors::RepositoryError, model::Product as ProductModel};
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

/// Reads return products in catalog insertion order.
#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_vendor(&self, vendor_id: &str) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<ProductModel>, RepositoryError>;
}

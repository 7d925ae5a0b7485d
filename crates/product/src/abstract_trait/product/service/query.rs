use crate::domain::requests::FindAllProducts;
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError, model::Product};
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn list_products(&self) -> Result<ApiResponse<Vec<Product>>, ServiceError>;
    async fn list_vendor_products(
        &self,
        vendor_id: &str,
    ) -> Result<ApiResponse<Vec<Product>>, ServiceError>;
    async fn browse(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponse<Vec<Product>>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<Product>, ServiceError>;
}

use crate::domain::requests::{CreateProductRequest, UpdateProductRequest};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError, model::Product};
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<Product>, ServiceError>;
    /// `false` when the product does not exist or the update is invalid.
    async fn update_product(&self, id: &str, req: &UpdateProductRequest) -> bool;
    /// `false` when the product does not exist.
    async fn delete_product(&self, id: &str) -> bool;
    async fn reserve_stock(&self, id: &str, qty: i32) -> Result<Product, ServiceError>;
    async fn release_stock(&self, id: &str, qty: i32) -> Result<Product, ServiceError>;
}

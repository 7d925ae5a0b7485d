use crate::domain::requests::{CreateProductRequest, UpdateProductRequest};
use async_trait::async_trait;
use shared::{errors::RepositoryError, model::Product as ProductModel};
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    async fn insert_product(&self, product: ProductModel) -> Result<ProductModel, RepositoryError>;
    async fn update_product(
        &self,
        id: &str,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    async fn increasing_stock(&self, id: &str, qty: i32) -> Result<ProductModel, RepositoryError>;
    async fn decreasing_stock(&self, id: &str, qty: i32) -> Result<ProductModel, RepositoryError>;
    async fn delete_product(&self, id: &str) -> Result<(), RepositoryError>;
}

use crate::domain::{
    requests::{AddCartItemRequest, UpdateCartQuantityRequest},
    response::CartResponse,
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartServiceTrait {
    async fn get_cart(&self, actor_id: &str) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn add_item(
        &self,
        actor_id: &str,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn update_quantity(
        &self,
        actor_id: &str,
        req: &UpdateCartQuantityRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn remove_item(
        &self,
        actor_id: &str,
        product_id: &str,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn clear(&self, actor_id: &str) -> Result<ApiResponse<CartResponse>, ServiceError>;
}

use crate::{
    domain::requests::{CreateOrderRequest, UpdateOrderStatusRequest},
    model::Order,
};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<Order>, ServiceError>;
    /// Same as [`change_status`](Self::change_status) but only reports whether it applied.
    async fn update_status(&self, req: &UpdateOrderStatusRequest) -> bool;
    async fn change_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<Order>, ServiceError>;
}

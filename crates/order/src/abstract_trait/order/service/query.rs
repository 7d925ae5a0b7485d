use crate::model::Order;
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<Order>>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<Order>, ServiceError>;
    /// Most recent first.
    async fn find_by_buyer(&self, buyer_id: &str) -> Result<ApiResponse<Vec<Order>>, ServiceError>;
    /// The last `limit` orders placed, newest first.
    async fn recent_orders(&self, limit: usize) -> Result<ApiResponse<Vec<Order>>, ServiceError>;
}

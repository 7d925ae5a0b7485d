use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError, model::User};
use std::sync::Arc;

pub type DynUserQueryService = Arc<dyn UserQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<User>>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<User>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<ApiResponse<User>, ServiceError>;
}

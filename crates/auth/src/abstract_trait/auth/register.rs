use async_trait::async_trait;
use shared::{
    domain::{requests::SignUpRequest, responses::ApiResponse},
    errors::ServiceError,
    model::User,
};
use std::sync::Arc;

pub type DynRegisterService = Arc<dyn RegisterServiceTrait + Send + Sync>;

#[async_trait]
pub trait RegisterServiceTrait {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<ApiResponse<User>, ServiceError>;
}

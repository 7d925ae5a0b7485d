use crate::domain::requests::{CreateUserRequest, UpdateUserRoleRequest};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError, model::User};
use std::sync::Arc;

pub type DynUserCommandService = Arc<dyn UserCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandServiceTrait {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<ApiResponse<User>, ServiceError>;
    /// `false` when the user does not exist.
    async fn update_role(&self, req: &UpdateUserRoleRequest) -> bool;
}

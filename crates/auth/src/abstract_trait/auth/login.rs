use crate::domain::response::SessionResponse;
use async_trait::async_trait;
use shared::{
    domain::{requests::SignInRequest, responses::ApiResponse},
    errors::ServiceError,
    model::User,
};
use std::sync::Arc;

pub type DynLoginService = Arc<dyn LoginServiceTrait + Send + Sync>;

#[async_trait]
pub trait LoginServiceTrait {
    /// Credential check only. `None` for an unknown email or a wrong password.
    async fn authenticate(&self, email: &str, password: &str) -> Option<User>;
    /// Checks credentials and opens a session.
    async fn sign_in(
        &self,
        request: &SignInRequest,
    ) -> Result<ApiResponse<SessionResponse>, ServiceError>;
}

use async_trait::async_trait;
use shared::model::User;
use std::sync::Arc;

pub type DynIdentityService = Arc<dyn IdentityServiceTrait + Send + Sync>;

#[async_trait]
pub trait IdentityServiceTrait {
    /// The signed-in user behind `session`, if the session is live and the user still exists.
    async fn current_actor(&self, session: &str) -> Option<User>;
    /// `false` when there was no such session.
    async fn sign_out(&self, session: &str) -> bool;
}

use async_trait::async_trait;
use shared::{errors::RepositoryError, model::User};
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError>;
    /// Emails compare case-insensitively.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}

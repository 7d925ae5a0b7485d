use async_trait::async_trait;
use shared::{
    errors::RepositoryError,
    model::{Role, User},
};
use std::sync::Arc;

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn insert_user(&self, user: User) -> Result<User, RepositoryError>;
    async fn update_role(&self, id: &str, role: Role) -> Result<User, RepositoryError>;
}

use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynSessionStore = Arc<dyn SessionStoreTrait + Send + Sync>;

/// Maps opaque session tokens to user ids.
#[async_trait]
pub trait SessionStoreTrait {
    async fn open(&self, user_id: &str) -> Result<String, RepositoryError>;
    async fn user_id(&self, token: &str) -> Result<Option<String>, RepositoryError>;
    async fn close(&self, token: &str) -> Result<bool, RepositoryError>;
}

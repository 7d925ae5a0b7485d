use crate::model::Credential;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCredentialRepository = Arc<dyn CredentialRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CredentialRepositoryTrait {
    async fn store_credential(&self, credential: Credential) -> Result<(), RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, RepositoryError>;
}

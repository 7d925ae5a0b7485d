use crate::{abstract_trait::credential::CredentialRepositoryTrait, model::Credential};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

/// Credentials keyed by lower-cased email.
#[derive(Clone, Debug, Default)]
pub struct CredentialRepository {
    credentials: Arc<RwLock<HashMap<String, Credential>>>,
}

impl CredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialRepositoryTrait for CredentialRepository {
    async fn store_credential(&self, credential: Credential) -> Result<(), RepositoryError> {
        let mut credentials = self.credentials.write().await;
        let key = credential.email.to_lowercase();

        if credentials.contains_key(&key) {
            return Err(RepositoryError::AlreadyExists(format!(
                "credential {}",
                credential.email
            )));
        }

        credentials.insert(key, credential);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, RepositoryError> {
        let credentials = self.credentials.read().await;
        Ok(credentials.get(&email.to_lowercase()).cloned())
    }
}

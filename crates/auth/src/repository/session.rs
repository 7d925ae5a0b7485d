use crate::abstract_trait::session::SessionStoreTrait;
use async_trait::async_trait;
use shared::{errors::RepositoryError, utils::generate_random_string};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::info;

const TOKEN_LENGTH: usize = 32;

#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStoreTrait for SessionStore {
    async fn open(&self, user_id: &str) -> Result<String, RepositoryError> {
        let token = generate_random_string(TOKEN_LENGTH)
            .map_err(|e| RepositoryError::Custom(format!("session token: {e}")))?;

        self.sessions
            .write()
            .await
            .insert(token.clone(), user_id.to_string());

        info!("🔑 Session opened for user {user_id}");
        Ok(token)
    }

    async fn user_id(&self, token: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn close(&self, token: &str) -> Result<bool, RepositoryError> {
        Ok(self.sessions.write().await.remove(token).is_some())
    }
}

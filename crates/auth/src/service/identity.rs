use crate::abstract_trait::{auth::IdentityServiceTrait, session::DynSessionStore};
use async_trait::async_trait;
use shared::model::User;
use tracing::{info, warn};
use user::abstract_trait::user::service::DynUserQueryService;

#[derive(Clone)]
pub struct IdentityService {
    sessions: DynSessionStore,
    user_query: DynUserQueryService,
}

impl IdentityService {
    pub fn new(sessions: DynSessionStore, user_query: DynUserQueryService) -> Self {
        Self {
            sessions,
            user_query,
        }
    }
}

#[async_trait]
impl IdentityServiceTrait for IdentityService {
    async fn current_actor(&self, session: &str) -> Option<User> {
        let user_id = match self.sessions.user_id(session).await {
            Ok(Some(id)) => id,
            Ok(None) => return None,
            Err(e) => {
                warn!("Session lookup failed: {e}");
                return None;
            }
        };

        // Role changes made by an admin apply to live sessions.
        self.user_query
            .find_by_id(&user_id)
            .await
            .map(|response| response.data)
            .ok()
    }

    async fn sign_out(&self, session: &str) -> bool {
        match self.sessions.close(session).await {
            Ok(closed) => {
                if closed {
                    info!("👋 Session closed");
                }
                closed
            }
            Err(e) => {
                warn!("Sign out failed: {e}");
                false
            }
        }
    }
}

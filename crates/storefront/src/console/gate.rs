use auth::{
    abstract_trait::auth::DynIdentityService,
    policy::{AccessPolicy, Action, RouteDecision, ensure_permitted},
};
use shared::{errors::ServiceError, model::User};
use tracing::warn;

/// Resolves the session behind a console call and checks it against the access policy.
#[derive(Clone)]
pub struct Gate {
    identity: DynIdentityService,
    policy: AccessPolicy,
}

impl Gate {
    pub fn new(identity: DynIdentityService, policy: AccessPolicy) -> Self {
        Self { identity, policy }
    }

    pub async fn visit(&self, session: Option<&str>, path: &str) -> RouteDecision {
        let actor = match session {
            Some(token) => self.identity.current_actor(token).await,
            None => None,
        };
        self.policy.decide(actor.as_ref(), path)
    }

    pub async fn authorize(&self, session: &str, action: Action) -> Result<User, ServiceError> {
        let actor = self
            .identity
            .current_actor(session)
            .await
            .ok_or_else(|| ServiceError::Forbidden("not signed in".into()))?;

        ensure_permitted(actor.role, action).inspect_err(|e| {
            warn!("🚫 {} denied: {e}", actor.email);
        })?;

        Ok(actor)
    }
}

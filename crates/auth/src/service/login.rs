use crate::{
    abstract_trait::{
        auth::LoginServiceTrait, credential::DynCredentialRepository, session::DynSessionStore,
    },
    domain::response::SessionResponse,
    policy::home_path,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynHashing,
    domain::{requests::SignInRequest, responses::ApiResponse},
    errors::ServiceError,
    model::User,
    utils::{Method, Metrics, TracingContext},
};
use tracing::{info, warn};
use user::abstract_trait::user::service::DynUserQueryService;
use validator::Validate;

pub struct LoginServiceDeps {
    pub hash: DynHashing,
    pub credentials: DynCredentialRepository,
    pub sessions: DynSessionStore,
    pub user_query: DynUserQueryService,
}

#[derive(Clone)]
pub struct LoginService {
    hash: DynHashing,
    credentials: DynCredentialRepository,
    sessions: DynSessionStore,
    user_query: DynUserQueryService,
    metrics: Metrics,
}

impl LoginService {
    pub fn new(deps: LoginServiceDeps, registry: &mut Registry) -> Self {
        let LoginServiceDeps {
            hash,
            credentials,
            sessions,
            user_query,
        } = deps;

        let metrics = Metrics::new();
        metrics.register("login_service", registry);

        Self {
            hash,
            credentials,
            sessions,
            user_query,
            metrics,
        }
    }

    async fn verify(&self, email: &str, password: &str) -> Result<User, ServiceError> {
        let credential = self
            .credentials
            .find_by_email(email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hash
            .compare_password(&credential.password_hash, password)
            .await?;

        let user = self.user_query.find_by_id(&credential.user_id).await?.data;
        Ok(user)
    }
}

#[async_trait]
impl LoginServiceTrait for LoginService {
    async fn authenticate(&self, email: &str, password: &str) -> Option<User> {
        match self.verify(email, password).await {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Authentication failed for {email}: {e}");
                None
            }
        }
    }

    async fn sign_in(
        &self,
        request: &SignInRequest,
    ) -> Result<ApiResponse<SessionResponse>, ServiceError> {
        info!("🔐 Sign in attempt for {}", request.email);
        let tracing_ctx = TracingContext::start("auth", "sign_in");

        let result = async {
            request.validate()?;
            let user = self.verify(&request.email, &request.password).await?;
            let session = self.sessions.open(&user.id).await?;

            Ok::<_, ServiceError>(ApiResponse::success(
                "Signed in successfully",
                SessionResponse {
                    session,
                    home_path: home_path(user.role).to_string(),
                    user,
                },
            ))
        }
        .await;

        match &result {
            Ok(_) => tracing_ctx.complete(&self.metrics, Method::Post, true, "Signed in"),
            Err(e) => tracing_ctx.complete(&self.metrics, Method::Post, false, &e.to_string()),
        }
        result
    }
}

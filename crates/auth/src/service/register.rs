use crate::{
    abstract_trait::{auth::RegisterServiceTrait, credential::DynCredentialRepository},
    model::Credential,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynHashing,
    domain::{requests::SignUpRequest, responses::ApiResponse},
    errors::ServiceError,
    model::User,
    utils::{Method, Metrics, TracingContext},
};
use tracing::info;
use user::{
    abstract_trait::user::service::DynUserCommandService, domain::requests::CreateUserRequest,
};
use validator::Validate;

pub struct RegisterServiceDeps {
    pub hash: DynHashing,
    pub credentials: DynCredentialRepository,
    pub user_command: DynUserCommandService,
}

#[derive(Clone)]
pub struct RegisterService {
    hash: DynHashing,
    credentials: DynCredentialRepository,
    user_command: DynUserCommandService,
    metrics: Metrics,
}

impl RegisterService {
    pub fn new(deps: RegisterServiceDeps, registry: &mut Registry) -> Self {
        let RegisterServiceDeps {
            hash,
            credentials,
            user_command,
        } = deps;

        let metrics = Metrics::new();
        metrics.register("register_service", registry);

        Self {
            hash,
            credentials,
            user_command,
            metrics,
        }
    }
}

#[async_trait]
impl RegisterServiceTrait for RegisterService {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<ApiResponse<User>, ServiceError> {
        info!("📝 Sign up for {} as {}", request.email, request.role);
        let tracing_ctx = TracingContext::start("auth", "sign_up");

        let result = async {
            request.validate()?;

            // Hashed before the user exists, so a bcrypt failure creates nothing.
            let password_hash = self.hash.hash_password(&request.password).await?;

            let user = self
                .user_command
                .create_user(&CreateUserRequest {
                    name: request.name.clone(),
                    email: request.email.clone(),
                    role: request.role,
                })
                .await?
                .data;

            self.credentials
                .store_credential(Credential {
                    user_id: user.id.clone(),
                    email: user.email.clone(),
                    password_hash,
                })
                .await?;

            Ok::<_, ServiceError>(ApiResponse::success("Signed up successfully", user))
        }
        .await;

        match &result {
            Ok(_) => tracing_ctx.complete(&self.metrics, Method::Post, true, "Signed up"),
            Err(e) => tracing_ctx.complete(&self.metrics, Method::Post, false, &e.to_string()),
        }
        result
    }
}

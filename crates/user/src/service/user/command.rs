use crate::{
    abstract_trait::user::{
        repository::{DynUserCommandRepository, DynUserQueryRepository},
        service::UserCommandServiceTrait,
    },
    domain::requests::{CreateUserRequest, UpdateUserRoleRequest},
};
use async_trait::async_trait;
use chrono::Utc;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::ApiResponse,
    errors::{RepositoryError, ServiceError},
    model::User,
    utils::{Method, Metrics, TracingContext, generate_id},
};
use tracing::{info, warn};
use validator::Validate;

#[derive(Clone)]
pub struct UserCommandService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    metrics: Metrics,
}

impl UserCommandService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("user_command_service", registry);

        Self {
            query,
            command,
            metrics,
        }
    }

    fn complete_tracing<T>(
        &self,
        tracing_ctx: TracingContext,
        method: Method,
        result: Result<T, ServiceError>,
        message: &str,
    ) -> Result<T, ServiceError> {
        match &result {
            Ok(_) => tracing_ctx.complete(&self.metrics, method, true, message),
            Err(e) => tracing_ctx.complete(&self.metrics, method, false, &e.to_string()),
        }
        result
    }
}

#[async_trait]
impl UserCommandServiceTrait for UserCommandService {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<ApiResponse<User>, ServiceError> {
        info!("👤 Creating user {} as {}", req.email, req.role);
        let tracing_ctx = TracingContext::start("user", "create_user");

        let result = async {
            req.validate()?;

            if self.query.find_by_email(&req.email).await?.is_some() {
                return Err(ServiceError::Repo(RepositoryError::AlreadyExists(format!(
                    "user {}",
                    req.email
                ))));
            }

            let now = Utc::now();
            let user = User {
                id: generate_id(),
                email: req.email.trim().to_string(),
                name: req.name.trim().to_string(),
                role: req.role,
                created_at: now,
                updated_at: now,
            };

            let user = self.command.insert_user(user).await?;
            Ok::<_, ServiceError>(ApiResponse::success("User created successfully", user))
        }
        .await;

        self.complete_tracing(tracing_ctx, Method::Post, result, "User created")
    }

    async fn update_role(&self, req: &UpdateUserRoleRequest) -> bool {
        info!("✏️ Setting role of user {} to {}", req.user_id, req.role);
        let tracing_ctx = TracingContext::start("user", "update_role");

        let result = self
            .command
            .update_role(&req.user_id, req.role)
            .await
            .map_err(ServiceError::from);
        if let Err(e) = &result {
            warn!("Role of user {} not changed: {e}", req.user_id);
        }

        self.complete_tracing(tracing_ctx, Method::Put, result, "User role updated")
            .is_ok()
    }
}

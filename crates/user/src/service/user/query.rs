use crate::abstract_trait::user::{
    repository::DynUserQueryRepository, service::UserQueryServiceTrait,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::ApiResponse,
    errors::ServiceError,
    model::User,
    utils::{Method, Metrics, TracingContext},
};

#[derive(Clone)]
pub struct UserQueryService {
    query: DynUserQueryRepository,
    metrics: Metrics,
}

impl UserQueryService {
    pub fn new(query: DynUserQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("user_query_service", registry);

        Self { query, metrics }
    }

    fn complete_tracing<T>(
        &self,
        tracing_ctx: TracingContext,
        result: Result<T, ServiceError>,
        message: &str,
    ) -> Result<T, ServiceError> {
        match &result {
            Ok(_) => tracing_ctx.complete(&self.metrics, Method::Get, true, message),
            Err(e) => tracing_ctx.complete(&self.metrics, Method::Get, false, &e.to_string()),
        }
        result
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<User>>, ServiceError> {
        let tracing_ctx = TracingContext::start("user", "find_all");

        let result = self
            .query
            .find_all()
            .await
            .map(|users| ApiResponse::success("Users retrieved successfully", users))
            .map_err(ServiceError::from);

        self.complete_tracing(tracing_ctx, result, "Users retrieved")
    }

    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<User>, ServiceError> {
        let tracing_ctx = TracingContext::start("user", "find_by_id");

        let result = async {
            let user = self
                .query
                .find_by_id(id)
                .await?
                .ok_or_else(|| ServiceError::NotFound(format!("user {id}")))?;
            Ok::<_, ServiceError>(ApiResponse::success("User retrieved successfully", user))
        }
        .await;

        self.complete_tracing(tracing_ctx, result, "User retrieved")
    }

    async fn find_by_email(&self, email: &str) -> Result<ApiResponse<User>, ServiceError> {
        let tracing_ctx = TracingContext::start("user", "find_by_email");

        let result = async {
            let user = self
                .query
                .find_by_email(email)
                .await?
                .ok_or_else(|| ServiceError::NotFound(format!("user {email}")))?;
            Ok::<_, ServiceError>(ApiResponse::success("User retrieved successfully", user))
        }
        .await;

        self.complete_tracing(tracing_ctx, result, "User retrieved")
    }
}

use crate::{
    abstract_trait::order::{repository::DynOrderQueryRepository, service::OrderQueryServiceTrait},
    model::Order,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::ApiResponse,
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use tracing::info;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    metrics: Metrics,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("order_query_service", registry);

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

/// Newest first. Orders created at the same instant keep the later one first.
fn newest_first(mut orders: Vec<Order>) -> Vec<Order> {
    orders.reverse();
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    orders
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<Order>>, ServiceError> {
        let tracing_ctx = TracingContext::start("order", "find_all");

        let result = self
            .query
            .find_all()
            .await
            .map(|orders| ApiResponse::success("Orders retrieved successfully", orders))
            .map_err(ServiceError::from);

        self.complete_tracing(tracing_ctx, result, "Orders retrieved")
    }

    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<Order>, ServiceError> {
        let tracing_ctx = TracingContext::start("order", "find_by_id");

        let result = async {
            let order = self
                .query
                .find_by_id(id)
                .await?
                .ok_or_else(|| ServiceError::NotFound(format!("order {id}")))?;
            Ok::<_, ServiceError>(ApiResponse::success("Order retrieved successfully", order))
        }
        .await;

        self.complete_tracing(tracing_ctx, result, "Order retrieved")
    }

    async fn find_by_buyer(&self, buyer_id: &str) -> Result<ApiResponse<Vec<Order>>, ServiceError> {
        info!("🔍 Listing orders of buyer {buyer_id}");
        let tracing_ctx = TracingContext::start("order", "find_by_buyer");

        let result = self
            .query
            .find_by_buyer(buyer_id)
            .await
            .map(|orders| ApiResponse::success("Orders retrieved successfully", newest_first(orders)))
            .map_err(ServiceError::from);

        self.complete_tracing(tracing_ctx, result, "Buyer orders retrieved")
    }

    async fn recent_orders(&self, limit: usize) -> Result<ApiResponse<Vec<Order>>, ServiceError> {
        let tracing_ctx = TracingContext::start("order", "recent_orders");

        let result = self
            .query
            .find_all()
            .await
            .map(|orders| {
                let recent: Vec<Order> = orders.into_iter().rev().take(limit).collect();
                ApiResponse::success("Recent orders retrieved successfully", recent)
            })
            .map_err(ServiceError::from);

        self.complete_tracing(tracing_ctx, result, "Recent orders retrieved")
    }
}

use crate::{
    abstract_trait::order::{
        repository::{DynOrderCommandRepository, DynOrderQueryRepository},
        service::OrderCommandServiceTrait,
    },
    domain::requests::{CreateOrderRequest, UpdateOrderStatusRequest},
    model::{Order, OrderItem, OrderStatus},
    transition,
};
use async_trait::async_trait;
use chrono::Utc;
use prometheus_client::registry::Registry;
use shared::{
    config::OrderTransitionPolicy,
    domain::responses::ApiResponse,
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext, generate_order_id},
};
use tracing::{info, warn};
use validator::Validate;

#[derive(Clone)]
pub struct OrderCommandService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    policy: OrderTransitionPolicy,
    metrics: Metrics,
}

impl OrderCommandService {
    pub fn new(
        query: DynOrderQueryRepository,
        command: DynOrderCommandRepository,
        policy: OrderTransitionPolicy,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("order_command_service", registry);

        Self {
            query,
            command,
            policy,
            metrics,
        }
    }

    pub fn policy(&self) -> OrderTransitionPolicy {
        self.policy
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
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

    async fn try_change_status(&self, req: &UpdateOrderStatusRequest) -> Result<Order, ServiceError> {
        let current = self
            .query
            .find_by_id(&req.order_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("order {}", req.order_id)))?;

        transition::check(self.policy, current.status, req.status)?;

        // Re-checked against the stored status under the write lock.
        let policy = self.policy;
        let status = req.status;
        let updated = self
            .command
            .update(
                &req.order_id,
                Box::new(move |order: &mut Order| {
                    transition::check(policy, order.status, status)?;
                    order.status = status;
                    order.updated_at = Utc::now();
                    Ok(())
                }),
            )
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("order {}", req.order_id)))?;

        info!("🔄 Order {} moved to {}", updated.id, updated.status);
        Ok(updated)
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<Order>, ServiceError> {
        info!(
            "🛒 Creating order for buyer {} with {} line(s)",
            req.buyer_id,
            req.items.len()
        );
        let tracing_ctx = TracingContext::start("order", "create_order");

        let result = async {
            req.validate()?;

            let items: Vec<OrderItem> = req.items.iter().map(OrderItem::from).collect();
            let id = generate_order_id().map_err(|e| ServiceError::Internal(e.to_string()))?;
            let now = Utc::now();

            let order = Order {
                id,
                buyer_id: req.buyer_id.clone(),
                buyer_name: req.buyer_name.clone(),
                buyer_email: req.buyer_email.clone(),
                total: Order::items_total(&items)?,
                items,
                status: OrderStatus::Pending,
                created_at: now,
                updated_at: now,
            };

            let order = self.command.append(order).await?;
            Ok::<_, ServiceError>(ApiResponse::success("Order created successfully", order))
        }
        .await;

        self.complete_tracing(tracing_ctx, Method::Post, result, "Order created")
    }

    async fn update_status(&self, req: &UpdateOrderStatusRequest) -> bool {
        match self.change_status(req).await {
            Ok(_) => true,
            Err(e) => {
                warn!("Order {} status not changed: {e}", req.order_id);
                false
            }
        }
    }

    async fn change_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<Order>, ServiceError> {
        info!("✏️ Setting order {} to {}", req.order_id, req.status);
        let tracing_ctx = TracingContext::start("order", "change_status");

        let result = self
            .try_change_status(req)
            .await
            .map(|order| ApiResponse::success("Order status updated successfully", order));

        self.complete_tracing(tracing_ctx, Method::Put, result, "Order status updated")
    }
}

use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::requests::{CreateProductRequest, UpdateProductRequest},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::ApiResponse,
    errors::{RepositoryError, ServiceError},
    model::Product,
    utils::{Method, Metrics, TracingContext},
};
use tracing::{error, info, warn};
use validator::Validate;

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_command_service", registry);

        Self { command, metrics }
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

    async fn try_update(&self, id: &str, req: &UpdateProductRequest) -> Result<Product, ServiceError> {
        req.validate()?;
        let product = self.command.update_product(id, req).await?;
        Ok(product)
    }

    fn check_quantity(qty: i32) -> Result<(), ServiceError> {
        if qty <= 0 {
            return Err(ServiceError::Validation(vec![format!(
                "quantity: must be at least 1, got {qty}"
            )]));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<Product>, ServiceError> {
        info!("🏗️ Creating product '{}' for vendor {}", req.name, req.vendor_id);
        let tracing_ctx = TracingContext::start("product", "create_product");

        let result = async {
            req.validate()?;
            let product = self.command.create_product(req).await?;
            Ok::<_, ServiceError>(ApiResponse::success("Product created successfully", product))
        }
        .await;

        self.complete_tracing(tracing_ctx, Method::Post, result, "Product created")
    }

    async fn update_product(&self, id: &str, req: &UpdateProductRequest) -> bool {
        info!("✏️ Updating product {id}");
        let tracing_ctx = TracingContext::start("product", "update_product");

        let result = self.try_update(id, req).await;
        if let Err(e) = &result {
            warn!("Product {id} not updated: {e}");
        }

        self.complete_tracing(tracing_ctx, Method::Put, result, "Product updated")
            .is_ok()
    }

    async fn delete_product(&self, id: &str) -> bool {
        info!("🗑️ Deleting product {id}");
        let tracing_ctx = TracingContext::start("product", "delete_product");

        let result = self
            .command
            .delete_product(id)
            .await
            .map_err(ServiceError::from);

        self.complete_tracing(tracing_ctx, Method::Delete, result, "Product deleted")
            .is_ok()
    }

    async fn reserve_stock(&self, id: &str, qty: i32) -> Result<Product, ServiceError> {
        let tracing_ctx = TracingContext::start("product", "reserve_stock");

        let result = async {
            Self::check_quantity(qty)?;
            let product = self.command.decreasing_stock(id, qty).await.map_err(|e| {
                if let RepositoryError::InsufficientStock { .. } = &e {
                    error!("❌ {e}");
                }
                ServiceError::Repo(e)
            })?;
            Ok::<_, ServiceError>(product)
        }
        .await;

        self.complete_tracing(tracing_ctx, Method::Put, result, "Stock reserved")
    }

    async fn release_stock(&self, id: &str, qty: i32) -> Result<Product, ServiceError> {
        let tracing_ctx = TracingContext::start("product", "release_stock");

        let result = async {
            Self::check_quantity(qty)?;
            let product = self.command.increasing_stock(id, qty).await?;
            Ok::<_, ServiceError>(product)
        }
        .await;

        self.complete_tracing(tracing_ctx, Method::Put, result, "Stock released")
    }
}

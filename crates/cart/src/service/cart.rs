use crate::{
    abstract_trait::cart::{CartServiceTrait, DynCartRepository},
    domain::{
        requests::{AddCartItemRequest, UpdateCartQuantityRequest},
        response::CartResponse,
    },
    model::Cart,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::ApiResponse,
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use tracing::info;
use validator::Validate;

/// Loads the shopper's persisted lines, applies exactly one cart rule, writes the whole
/// list back and returns the re-derived cart. A failed write leaves the stored cart as
/// it was.
#[derive(Clone)]
pub struct CartService {
    repository: DynCartRepository,
    metrics: Metrics,
}

impl CartService {
    pub fn new(repository: DynCartRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("cart_service", registry);

        Self {
            repository,
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    async fn load(&self, actor_id: &str) -> Result<Cart, ServiceError> {
        let items = self.repository.load_cart_items(actor_id).await?;
        Ok(Cart::from_items(items))
    }

    async fn mutate<F>(
        &self,
        actor_id: &str,
        operation: &str,
        method: Method,
        apply: F,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>
    where
        F: FnOnce(&mut Cart) -> bool + Send,
    {
        let tracing_ctx = TracingContext::start("cart", operation);

        let result = async {
            let mut cart = self.load(actor_id).await?;
            let changed = apply(&mut cart);
            // An overflowing cart is rejected before it is stored.
            let response = CartResponse::try_from(&cart)?;
            if changed {
                self.repository
                    .persist_cart_items(actor_id, cart.items())
                    .await?;
            }
            Ok::<CartResponse, ServiceError>(response)
        }
        .await;

        match result {
            Ok(response) => {
                tracing_ctx.complete(&self.metrics, method, true, operation);
                Ok(ApiResponse::success("Cart updated successfully", response))
            }
            Err(err) => {
                tracing_ctx.complete(&self.metrics, method, false, &err.to_string());
                Err(err)
            }
        }
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn get_cart(&self, actor_id: &str) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("cart", "get_cart");

        let result = self
            .load(actor_id)
            .await
            .and_then(|cart| CartResponse::try_from(&cart));

        match result {
            Ok(response) => {
                tracing_ctx.complete(&self.metrics, Method::Get, true, "Cart retrieved");
                Ok(ApiResponse::success("Cart retrieved successfully", response))
            }
            Err(err) => {
                tracing_ctx.complete(&self.metrics, Method::Get, false, &err.to_string());
                Err(err)
            }
        }
    }

    async fn add_item(
        &self,
        actor_id: &str,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        req.validate()?;

        info!(
            "🛒 Adding product_id={} x{} to cart of {actor_id}",
            req.product_id, req.quantity
        );

        let descriptor = req.descriptor();
        let quantity = req.quantity;

        self.mutate(actor_id, "add_item", Method::Post, move |cart| {
            cart.add_item(descriptor, quantity)
        })
        .await
    }

    async fn update_quantity(
        &self,
        actor_id: &str,
        req: &UpdateCartQuantityRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        req.validate()?;

        info!(
            "✏️ Setting quantity of product_id={} to {} for {actor_id}",
            req.product_id, req.quantity
        );

        let product_id = req.product_id.clone();
        let quantity = req.quantity;

        self.mutate(actor_id, "update_quantity", Method::Put, move |cart| {
            cart.update_quantity(&product_id, quantity)
        })
        .await
    }

    async fn remove_item(
        &self,
        actor_id: &str,
        product_id: &str,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        info!("🗑️ Removing product_id={product_id} from cart of {actor_id}");

        let product_id = product_id.to_string();

        self.mutate(actor_id, "remove_item", Method::Delete, move |cart| {
            cart.remove_item(&product_id)
        })
        .await
    }

    async fn clear(&self, actor_id: &str) -> Result<ApiResponse<CartResponse>, ServiceError> {
        info!("🧹 Clearing cart of {actor_id}");

        self.mutate(actor_id, "clear", Method::Delete, |cart| {
            let had_items = !cart.is_empty();
            cart.clear();
            had_items
        })
        .await
    }
}

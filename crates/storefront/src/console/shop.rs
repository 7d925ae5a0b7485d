use crate::{console::Gate, di::DependenciesInject, domain::requests::AddToCartRequest};
use auth::policy::Action;
use cart::{
    abstract_trait::cart::DynCartService,
    domain::{
        requests::{AddCartItemRequest, UpdateCartQuantityRequest},
        response::CartResponse,
    },
    model::CartItem,
};
use order::{
    abstract_trait::order::service::{DynOrderCommandService, DynOrderQueryService},
    domain::requests::{CreateOrderItemRequest, CreateOrderRequest},
    model::Order,
};
use product::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::requests::FindAllProducts,
};
use shared::{
    domain::responses::ApiResponse,
    errors::{RepositoryError, ServiceError},
    model::{Product, User},
};
use tracing::{error, info, warn};

/// Shopper console: browsing, cart, checkout and order history.
#[derive(Clone)]
pub struct ShopConsole {
    gate: Gate,
    cart: DynCartService,
    product_query: DynProductQueryService,
    product_command: DynProductCommandService,
    order_command: DynOrderCommandService,
    order_query: DynOrderQueryService,
    reserve_stock: bool,
}

impl ShopConsole {
    pub fn new(gate: Gate, di: &DependenciesInject) -> Self {
        Self {
            gate,
            cart: di.cart.clone(),
            product_query: di.product_query.clone(),
            product_command: di.product_command.clone(),
            order_command: di.order_command.clone(),
            order_query: di.order_query.clone(),
            reserve_stock: di.config.reserve_stock_on_checkout,
        }
    }

    pub async fn browse(
        &self,
        filter: &FindAllProducts,
    ) -> Result<ApiResponse<Vec<Product>>, ServiceError> {
        self.product_query.browse(filter).await
    }

    pub async fn cart(&self, session: &str) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let actor = self.gate.authorize(session, Action::ManageCart).await?;
        self.cart.get_cart(&actor.id).await
    }

    /// Adds a catalog product at its current price. Products with no stock are refused.
    pub async fn add_to_cart(
        &self,
        session: &str,
        req: &AddToCartRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let actor = self.gate.authorize(session, Action::ManageCart).await?;
        let product = self.product_query.find_by_id(&req.product_id).await?.data;

        if !product.in_stock() {
            return Err(ServiceError::Repo(RepositoryError::InsufficientStock {
                product_id: product.id,
                requested: req.quantity,
                available: product.stock_quantity,
            }));
        }

        let item = AddCartItemRequest {
            product_id: product.id,
            product_name: product.name,
            unit_price: product.unit_price,
            image_url: product.image_url,
            vendor_name: product.vendor_name,
            quantity: req.quantity,
        };
        self.cart.add_item(&actor.id, &item).await
    }

    pub async fn update_cart_quantity(
        &self,
        session: &str,
        req: &UpdateCartQuantityRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let actor = self.gate.authorize(session, Action::ManageCart).await?;
        self.cart.update_quantity(&actor.id, req).await
    }

    pub async fn remove_from_cart(
        &self,
        session: &str,
        product_id: &str,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let actor = self.gate.authorize(session, Action::ManageCart).await?;
        self.cart.remove_item(&actor.id, product_id).await
    }

    pub async fn clear_cart(&self, session: &str) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let actor = self.gate.authorize(session, Action::ManageCart).await?;
        self.cart.clear(&actor.id).await
    }

    /// Turns the cart into a pending order and empties the cart.
    ///
    /// With stock reservation enabled every line is reserved first; any failure releases
    /// what was already reserved. The cart is only cleared once the order is stored.
    pub async fn checkout(&self, session: &str) -> Result<ApiResponse<Order>, ServiceError> {
        let actor = self.gate.authorize(session, Action::Checkout).await?;
        let cart = self.cart.get_cart(&actor.id).await?.data;

        if cart.items.is_empty() {
            return Err(ServiceError::Validation(vec!["cart: Cart is empty".into()]));
        }

        info!("💳 Checkout for {} with {} item(s)", actor.email, cart.item_count);

        let reserved = if self.reserve_stock {
            self.reserve_lines(&cart.items).await?
        } else {
            Vec::new()
        };

        let order = match self.order_command.create_order(&order_request(&actor, &cart.items)).await
        {
            Ok(response) => response,
            Err(e) => {
                self.release_lines(&reserved).await;
                return Err(e);
            }
        };

        if let Err(e) = self.cart.clear(&actor.id).await {
            warn!("Order {} placed but cart of {} not cleared: {e}", order.data.id, actor.id);
        }

        Ok(order)
    }

    pub async fn my_orders(&self, session: &str) -> Result<ApiResponse<Vec<Order>>, ServiceError> {
        let actor = self.gate.authorize(session, Action::ViewOwnOrders).await?;
        self.order_query.find_by_buyer(&actor.id).await
    }

    async fn reserve_lines(&self, items: &[CartItem]) -> Result<Vec<(String, i32)>, ServiceError> {
        let mut reserved = Vec::with_capacity(items.len());

        for item in items {
            match self
                .product_command
                .reserve_stock(&item.product_id, item.quantity)
                .await
            {
                Ok(_) => reserved.push((item.product_id.clone(), item.quantity)),
                Err(e) => {
                    self.release_lines(&reserved).await;
                    return Err(e);
                }
            }
        }

        Ok(reserved)
    }

    async fn release_lines(&self, reserved: &[(String, i32)]) {
        for (product_id, quantity) in reserved {
            if let Err(e) = self.product_command.release_stock(product_id, *quantity).await {
                error!("❌ Failed to release {quantity} of {product_id}: {e}");
            }
        }
    }
}

fn order_request(actor: &User, items: &[CartItem]) -> CreateOrderRequest {
    CreateOrderRequest {
        buyer_id: actor.id.clone(),
        buyer_name: actor.name.clone(),
        buyer_email: actor.email.clone(),
        items: items
            .iter()
            .map(|item| CreateOrderItemRequest {
                product_id: item.product_id.clone(),
                product_name: item.product_name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
            .collect(),
    }
}

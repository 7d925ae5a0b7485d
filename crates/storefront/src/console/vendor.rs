use crate::{
    console::Gate,
    di::DependenciesInject,
    domain::{requests::NewProductRequest, response::VendorStats},
};
use auth::policy::Action;
use order::{
    abstract_trait::scoping::DynOrderScopingService, domain::response::VendorOrderResponse,
};
use product::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::requests::{CreateProductRequest, UpdateProductRequest},
};
use shared::{
    domain::responses::ApiResponse,
    errors::ServiceError,
    model::{Product, User},
    utils::checked_sum,
};
use tracing::info;
use user::abstract_trait::vendor::service::DynVendorQueryService;

/// Vendor console: the signed-in vendor's own products, orders and dashboard.
#[derive(Clone)]
pub struct VendorConsole {
    gate: Gate,
    product_command: DynProductCommandService,
    product_query: DynProductQueryService,
    order_scoping: DynOrderScopingService,
    vendor_query: DynVendorQueryService,
    top_products: usize,
    recent_orders: usize,
}

impl VendorConsole {
    pub fn new(gate: Gate, di: &DependenciesInject) -> Self {
        Self {
            gate,
            product_command: di.product_command.clone(),
            product_query: di.product_query.clone(),
            order_scoping: di.order_scoping.clone(),
            vendor_query: di.vendor_query.clone(),
            top_products: di.config.vendor_top_products,
            recent_orders: di.config.recent_orders_limit,
        }
    }

    pub async fn products(&self, session: &str) -> Result<ApiResponse<Vec<Product>>, ServiceError> {
        let actor = self.gate.authorize(session, Action::ManageOwnProducts).await?;
        self.product_query.list_vendor_products(&actor.id).await
    }

    pub async fn add_product(
        &self,
        session: &str,
        req: &NewProductRequest,
    ) -> Result<ApiResponse<Product>, ServiceError> {
        let actor = self.gate.authorize(session, Action::ManageOwnProducts).await?;

        let create = CreateProductRequest {
            name: req.name.clone(),
            description: req.description.clone(),
            unit_price: req.unit_price,
            category: req.category.clone(),
            stock_quantity: req.stock_quantity,
            vendor_name: self.storefront_name(&actor).await,
            vendor_id: actor.id,
            image_url: req.image_url.clone(),
        };
        self.product_command.create_product(&create).await
    }

    /// `Ok(false)` when the product does not exist or the update is rejected.
    pub async fn update_product(
        &self,
        session: &str,
        product_id: &str,
        req: &UpdateProductRequest,
    ) -> Result<bool, ServiceError> {
        let actor = self.gate.authorize(session, Action::ManageOwnProducts).await?;
        if !self.owns(&actor, product_id).await? {
            return Ok(false);
        }
        Ok(self.product_command.update_product(product_id, req).await)
    }

    pub async fn delete_product(&self, session: &str, product_id: &str) -> Result<bool, ServiceError> {
        let actor = self.gate.authorize(session, Action::ManageOwnProducts).await?;
        if !self.owns(&actor, product_id).await? {
            return Ok(false);
        }
        Ok(self.product_command.delete_product(product_id).await)
    }

    pub async fn orders(&self, session: &str) -> Result<Vec<VendorOrderResponse>, ServiceError> {
        let actor = self.gate.authorize(session, Action::ViewVendorOrders).await?;
        self.order_scoping.vendor_orders(&actor.id).await
    }

    pub async fn dashboard(&self, session: &str) -> Result<VendorStats, ServiceError> {
        let actor = self.gate.authorize(session, Action::ViewVendorDashboard).await?;
        info!("📊 Building dashboard for vendor {}", actor.id);

        let products = self.product_query.list_vendor_products(&actor.id).await?.data;
        let orders = self.order_scoping.vendor_orders(&actor.id).await?;
        let top_products = self
            .order_scoping
            .top_selling_products(&actor.id, self.top_products)
            .await?;

        Ok(VendorStats {
            total_products: products.len(),
            total_orders: orders.len(),
            total_revenue: checked_sum(orders.iter().map(|o| Ok(o.vendor_subtotal)))?,
            recent_orders: orders.iter().rev().take(self.recent_orders).cloned().collect(),
            top_products,
        })
    }

    /// `Ok(false)` for an unknown product, `Forbidden` for another vendor's product.
    async fn owns(&self, actor: &User, product_id: &str) -> Result<bool, ServiceError> {
        let product = match self.product_query.find_by_id(product_id).await {
            Ok(response) => response.data,
            Err(e) if e.is_not_found() => return Ok(false),
            Err(e) => return Err(e),
        };

        if product.vendor_id != actor.id {
            return Err(ServiceError::Forbidden(format!(
                "product {product_id} belongs to another vendor"
            )));
        }
        Ok(true)
    }

    /// Business name of the vendor profile, falling back to the account name.
    async fn storefront_name(&self, actor: &User) -> String {
        match self.vendor_query.find_by_id(&actor.id).await {
            Ok(response) => response.data.business_name,
            Err(_) => actor.name.clone(),
        }
    }
}

use crate::{
    console::Gate,
    di::DependenciesInject,
    domain::response::{AdminStats, VendorSummary},
};
use auth::policy::Action;
use order::{
    abstract_trait::{
        order::service::{DynOrderCommandService, DynOrderQueryService},
        scoping::DynOrderScopingService,
    },
    domain::requests::UpdateOrderStatusRequest,
    model::Order,
};
use product::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::requests::UpdateProductRequest,
};
use shared::{
    domain::responses::ApiResponse,
    errors::ServiceError,
    model::{Product, Role, User},
};
use tracing::info;
use user::{
    abstract_trait::{
        user::service::{DynUserCommandService, DynUserQueryService},
        vendor::service::{DynVendorCommandService, DynVendorQueryService},
    },
    domain::requests::{UpdateUserRoleRequest, UpdateVendorStatusRequest},
};

/// Admin panel: users, vendors, every product and order, platform dashboard.
#[derive(Clone)]
pub struct AdminConsole {
    gate: Gate,
    user_command: DynUserCommandService,
    user_query: DynUserQueryService,
    vendor_command: DynVendorCommandService,
    vendor_query: DynVendorQueryService,
    product_command: DynProductCommandService,
    product_query: DynProductQueryService,
    order_command: DynOrderCommandService,
    order_query: DynOrderQueryService,
    order_scoping: DynOrderScopingService,
    recent_orders: usize,
}

impl AdminConsole {
    pub fn new(gate: Gate, di: &DependenciesInject) -> Self {
        Self {
            gate,
            user_command: di.user_command.clone(),
            user_query: di.user_query.clone(),
            vendor_command: di.vendor_command.clone(),
            vendor_query: di.vendor_query.clone(),
            product_command: di.product_command.clone(),
            product_query: di.product_query.clone(),
            order_command: di.order_command.clone(),
            order_query: di.order_query.clone(),
            order_scoping: di.order_scoping.clone(),
            recent_orders: di.config.recent_orders_limit,
        }
    }

    pub async fn users(&self, session: &str) -> Result<ApiResponse<Vec<User>>, ServiceError> {
        self.gate.authorize(session, Action::ManageUsers).await?;
        self.user_query.find_all().await
    }

    pub async fn update_role(
        &self,
        session: &str,
        req: &UpdateUserRoleRequest,
    ) -> Result<bool, ServiceError> {
        self.gate.authorize(session, Action::ManageUsers).await?;
        Ok(self.user_command.update_role(req).await)
    }

    /// Vendors with product and order counts derived from the catalog and the order log.
    pub async fn vendors(&self, session: &str) -> Result<Vec<VendorSummary>, ServiceError> {
        self.gate.authorize(session, Action::ManageVendors).await?;
        let vendors = self.vendor_query.find_all().await?.data;

        let mut summaries = Vec::with_capacity(vendors.len());
        for vendor in vendors {
            let total_products = self.product_query.list_vendor_products(&vendor.id).await?.data.len();
            let total_orders = self.order_scoping.vendor_orders(&vendor.id).await?.len();
            summaries.push(VendorSummary {
                vendor,
                total_products,
                total_orders,
            });
        }
        Ok(summaries)
    }

    pub async fn update_vendor_status(
        &self,
        session: &str,
        req: &UpdateVendorStatusRequest,
    ) -> Result<bool, ServiceError> {
        self.gate.authorize(session, Action::ManageVendors).await?;
        Ok(self.vendor_command.update_vendor_status(req).await)
    }

    pub async fn products(&self, session: &str) -> Result<ApiResponse<Vec<Product>>, ServiceError> {
        self.gate.authorize(session, Action::ManageAllProducts).await?;
        self.product_query.list_products().await
    }

    pub async fn update_product(
        &self,
        session: &str,
        product_id: &str,
        req: &UpdateProductRequest,
    ) -> Result<bool, ServiceError> {
        self.gate.authorize(session, Action::ManageAllProducts).await?;
        Ok(self.product_command.update_product(product_id, req).await)
    }

    pub async fn delete_product(&self, session: &str, product_id: &str) -> Result<bool, ServiceError> {
        self.gate.authorize(session, Action::ManageAllProducts).await?;
        Ok(self.product_command.delete_product(product_id).await)
    }

    pub async fn orders(&self, session: &str) -> Result<ApiResponse<Vec<Order>>, ServiceError> {
        self.gate.authorize(session, Action::ManageOrderStatus).await?;
        self.order_query.find_all().await
    }

    pub async fn update_order_status(
        &self,
        session: &str,
        req: &UpdateOrderStatusRequest,
    ) -> Result<bool, ServiceError> {
        self.gate.authorize(session, Action::ManageOrderStatus).await?;
        Ok(self.order_command.update_status(req).await)
    }

    pub async fn dashboard(&self, session: &str) -> Result<AdminStats, ServiceError> {
        let actor = self.gate.authorize(session, Action::ViewPlatformDashboard).await?;
        info!("📊 Building platform dashboard for {}", actor.email);

        let users = self.user_query.find_all().await?.data;
        let vendors = self.vendor_query.find_all().await?.data;
        let products = self.product_query.list_products().await?.data;
        let orders = self.order_query.find_all().await?.data;

        Ok(AdminStats {
            total_users: users.iter().filter(|u| u.role == Role::User).count(),
            total_vendors: vendors.len(),
            total_orders: orders.len(),
            total_products: products.len(),
            total_revenue: self.order_scoping.platform_revenue().await?,
            recent_orders: self.order_query.recent_orders(self.recent_orders).await?.data,
        })
    }
}

use crate::{
    domain::response::{TopProductResponse, VendorOrderResponse},
    model::Order,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderScopingService = Arc<dyn OrderScopingServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderScopingServiceTrait {
    /// Orders with at least one line for a product owned by the vendor, in insertion order.
    async fn vendor_orders(&self, vendor_id: &str) -> Result<Vec<VendorOrderResponse>, ServiceError>;
    async fn vendor_order_subtotal(
        &self,
        order: &Order,
        vendor_id: &str,
    ) -> Result<Decimal, ServiceError>;
    async fn vendor_revenue(&self, vendor_id: &str) -> Result<Decimal, ServiceError>;
    /// Vendor products ranked by units sold. Products with no sales are included.
    async fn top_selling_products(
        &self,
        vendor_id: &str,
        limit: usize,
    ) -> Result<Vec<TopProductResponse>, ServiceError>;
    /// Sum of every order total, whatever its status.
    async fn platform_revenue(&self) -> Result<Decimal, ServiceError>;
}

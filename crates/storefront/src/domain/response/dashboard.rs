use order::{
    domain::response::{TopProductResponse, VendorOrderResponse},
    model::Order,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminStats {
    /// Accounts with the shopper role only.
    pub total_users: usize,
    pub total_vendors: usize,
    pub total_orders: usize,
    pub total_products: usize,
    pub total_revenue: Decimal,
    pub recent_orders: Vec<Order>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorStats {
    pub total_products: usize,
    pub total_orders: usize,
    /// Sum of the vendor's own order lines.
    pub total_revenue: Decimal,
    pub recent_orders: Vec<VendorOrderResponse>,
    pub top_products: Vec<TopProductResponse>,
}

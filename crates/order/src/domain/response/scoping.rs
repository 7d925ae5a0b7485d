use crate::model::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::model::Product;

/// An order as a vendor sees it: the whole order plus the share made of their products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorOrderResponse {
    pub order: Order,
    pub vendor_subtotal: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProductResponse {
    pub product: Product,
    pub quantity_sold: i64,
}

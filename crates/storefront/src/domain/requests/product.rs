use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product form of the vendor console. Vendor id and name come from the signed-in vendor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub unit_price: Decimal,
    pub category: String,
    pub stock_quantity: i32,
    #[serde(default)]
    pub image_url: Option<String>,
}

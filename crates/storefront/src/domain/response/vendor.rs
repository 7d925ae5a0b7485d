use serde::{Deserialize, Serialize};
use shared::model::Vendor;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorSummary {
    pub vendor: Vendor,
    pub total_products: usize,
    pub total_orders: usize,
}

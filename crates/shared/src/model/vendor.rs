use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    Active,
    Pending,
    Suspended,
}

impl fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VendorStatus::Active => "active",
            VendorStatus::Pending => "pending",
            VendorStatus::Suspended => "suspended",
        };
        f.write_str(s)
    }
}

/// Seller record. `id` is the vendor user's account id; products point at it through
/// `vendor_id`. Product and order totals are derived at read time, not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub business_name: String,
    pub status: VendorStatus,
    pub created_at: DateTime<Utc>,
}

use serde::{Deserialize, Serialize};
use shared::model::VendorStatus;
use validator::Validate;

/// Registers the seller profile of an existing vendor account; `user_id` becomes the
/// vendor id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVendorRequest {
    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,

    #[validate(length(min = 2, message = "Display name must be at least 2 characters"))]
    pub display_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Business name is required"))]
    pub business_name: String,

    #[serde(default = "default_status")]
    pub status: VendorStatus,
}

fn default_status() -> VendorStatus {
    VendorStatus::Pending
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVendorStatusRequest {
    pub vendor_id: String,
    pub status: VendorStatus,
}

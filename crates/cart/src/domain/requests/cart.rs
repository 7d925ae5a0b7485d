use crate::model::CartItemDescriptor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::utils::validate_unit_price;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCartItemRequest {
    #[validate(length(min = 1, message = "Product id is required"))]
    pub product_id: String,

    #[validate(length(min = 1, message = "Product name is required"))]
    pub product_name: String,

    #[validate(custom(function = "validate_unit_price"))]
    pub unit_price: Decimal,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub vendor_name: String,

    // Non-positive quantities are accepted here and ignored by the cart.
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

impl AddCartItemRequest {
    pub fn descriptor(&self) -> CartItemDescriptor {
        CartItemDescriptor {
            product_id: self.product_id.clone(),
            product_name: self.product_name.clone(),
            unit_price: self.unit_price,
            image_url: self.image_url.clone(),
            vendor_name: self.vendor_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCartQuantityRequest {
    #[validate(length(min = 1, message = "Product id is required"))]
    pub product_id: String,

    pub quantity: i32,
}

use crate::model::{OrderItem, OrderStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::utils::validate_unit_price;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderItemRequest {
    #[validate(length(min = 1, message = "Product id is required"))]
    pub product_id: String,

    pub product_name: String,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    #[validate(custom(function = "validate_unit_price"))]
    pub unit_price: Decimal,
}

impl From<&CreateOrderItemRequest> for OrderItem {
    fn from(req: &CreateOrderItemRequest) -> Self {
        OrderItem {
            product_id: req.product_id.clone(),
            product_name: req.product_name.clone(),
            quantity: req.quantity,
            unit_price: req.unit_price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Buyer id is required"))]
    pub buyer_id: String,

    pub buyer_name: String,

    pub buyer_email: String,

    #[validate(length(min = 1, message = "Order must contain at least one item"), nested)]
    pub items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub order_id: String,
    pub status: OrderStatus,
}

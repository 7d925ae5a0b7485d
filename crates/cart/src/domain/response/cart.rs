use crate::model::{Cart, CartItem};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub total: Decimal,
    #[serde(rename = "item_count")]
    pub item_count: i64,
}

impl TryFrom<&Cart> for CartResponse {
    type Error = ServiceError;

    fn try_from(cart: &Cart) -> Result<Self, Self::Error> {
        Ok(CartResponse {
            items: cart.items().to_vec(),
            total: cart.total()?,
            item_count: cart.item_count(),
        })
    }
}

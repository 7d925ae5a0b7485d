mod order;

pub use self::order::{CreateOrderItemRequest, CreateOrderRequest, UpdateOrderStatusRequest};

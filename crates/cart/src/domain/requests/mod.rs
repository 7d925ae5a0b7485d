mod cart;

pub use self::cart::{AddCartItemRequest, UpdateCartQuantityRequest};

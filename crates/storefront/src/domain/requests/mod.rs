mod product;
mod shop;

pub use self::product::NewProductRequest;
pub use self::shop::AddToCartRequest;

mod scoping;

pub use self::scoping::{TopProductResponse, VendorOrderResponse};

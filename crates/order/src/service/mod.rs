mod order;
mod scoping;

pub use self::order::{OrderCommandService, OrderQueryService};
pub use self::scoping::{OrderScopingService, vendor_order_subtotal};

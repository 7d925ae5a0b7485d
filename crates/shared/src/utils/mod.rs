mod logs;
mod metrics;
mod money;
mod random_string;
mod tracing_context;

pub use self::logs::init_logger;
pub use self::metrics::{Labels, Method, Metrics, Status};
pub use self::money::{MAX_UNIT_PRICE, checked_sum, line_subtotal, validate_unit_price};
pub use self::random_string::{generate_id, generate_order_id, generate_random_string};
pub use self::tracing_context::TracingContext;

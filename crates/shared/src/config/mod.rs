mod hashing;
mod myconfig;

pub use self::hashing::Hashing;
pub use self::myconfig::{Config, OrderTransitionPolicy};

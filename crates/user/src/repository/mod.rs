mod store;
mod user;
mod vendor;

pub use self::store::{UserStore, VendorStore};
pub use self::user::{UserCommandRepository, UserQueryRepository};
pub use self::vendor::{VendorCommandRepository, VendorQueryRepository};

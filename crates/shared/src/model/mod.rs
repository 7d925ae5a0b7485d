mod product;
mod role;
mod user;
mod vendor;

pub use self::product::Product;
pub use self::role::Role;
pub use self::user::User;
pub use self::vendor::{Vendor, VendorStatus};

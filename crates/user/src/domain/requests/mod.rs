mod user;
mod vendor;

pub use self::user::{CreateUserRequest, UpdateUserRoleRequest};
pub use self::vendor::{CreateVendorRequest, UpdateVendorStatusRequest};

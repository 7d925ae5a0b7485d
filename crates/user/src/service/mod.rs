mod user;
mod vendor;

pub use self::user::{UserCommandService, UserQueryService};
pub use self::vendor::{VendorCommandService, VendorQueryService};

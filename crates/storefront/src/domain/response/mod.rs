mod dashboard;
mod vendor;

pub use self::dashboard::{AdminStats, VendorStats};
pub use self::vendor::VendorSummary;

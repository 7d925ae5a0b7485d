mod admin;
mod gate;
mod shop;
mod vendor;

pub use self::admin::AdminConsole;
pub use self::gate::Gate;
pub use self::shop::ShopConsole;
pub use self::vendor::VendorConsole;

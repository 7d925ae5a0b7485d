pub mod identity;
pub mod login;
pub mod register;

pub use self::identity::{DynIdentityService, IdentityServiceTrait};
pub use self::login::{DynLoginService, LoginServiceTrait};
pub use self::register::{DynRegisterService, RegisterServiceTrait};

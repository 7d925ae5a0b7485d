mod auth;

pub use self::auth::{SignInRequest, SignUpRequest};

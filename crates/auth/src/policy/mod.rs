mod action;
mod route;

pub use self::action::{Action, ensure_permitted, permits};
pub use self::route::{AccessPolicy, HOME_PATH, LOGIN_PATH, RouteDecision, home_path};

mod session;

pub use self::session::SessionResponse;

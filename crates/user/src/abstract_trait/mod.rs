pub mod user;
pub mod vendor;

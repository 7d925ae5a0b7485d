mod credential;
mod session;

pub use self::credential::CredentialRepository;
pub use self::session::SessionStore;

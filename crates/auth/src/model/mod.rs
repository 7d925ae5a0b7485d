mod credential;

pub use self::credential::Credential;

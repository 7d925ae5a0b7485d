/// Login secret of a user account. The password is only ever held as a bcrypt hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub user_id: String,
    pub email: String,
    pub password_hash: String,
}

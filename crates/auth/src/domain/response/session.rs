use serde::{Deserialize, Serialize};
use shared::model::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session: String,
    pub user: User,
    /// Where the signed-in user lands: their role home.
    pub home_path: String,
}

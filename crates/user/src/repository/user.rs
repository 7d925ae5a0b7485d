use crate::{
    abstract_trait::user::repository::{UserCommandRepositoryTrait, UserQueryRepositoryTrait},
    repository::UserStore,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::{
    errors::RepositoryError,
    model::{Role, User},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct UserQueryRepository {
    store: UserStore,
}

impl UserQueryRepository {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let users = self.store.users.read().await;
        info!("🔍 Fetched {} users", users.len());
        Ok(users.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.store.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.store.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

#[derive(Clone)]
pub struct UserCommandRepository {
    store: UserStore,
}

impl UserCommandRepository {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn insert_user(&self, user: User) -> Result<User, RepositoryError> {
        let mut users = self.store.users.write().await;

        if users
            .iter()
            .any(|u| u.id == user.id || u.email.eq_ignore_ascii_case(&user.email))
        {
            error!("❌ User {} already exists", user.email);
            return Err(RepositoryError::AlreadyExists(format!("user {}", user.email)));
        }

        info!("👤 User {} stored with role {}", user.email, user.role);
        users.push(user.clone());
        Ok(user)
    }

    async fn update_role(&self, id: &str, role: Role) -> Result<User, RepositoryError> {
        let mut users = self.store.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::NotFound)?;

        user.role = role;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

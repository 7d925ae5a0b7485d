#![allow(dead_code)]

use shared::{config::Config, domain::requests::SignInRequest};
use storefront::{seed::DEMO_PASSWORD, state::AppState};

pub const ADMIN: &str = "admin@ecommerce.com";
pub const TECH_VENDOR: &str = "vendor@ecommerce.com";
pub const FASHION_VENDOR: &str = "jane.smith@example.com";
pub const SHOPPER: &str = "user@ecommerce.com";
pub const JOHN: &str = "john.doe@example.com";

pub async fn app_with(config: Config) -> AppState {
    AppState::new(config).await.expect("app state")
}

pub async fn demo_app() -> AppState {
    app_with(Config::default()).await
}

pub async fn sign_in(app: &AppState, email: &str) -> String {
    app.di_container
        .login
        .sign_in(&SignInRequest {
            email: email.into(),
            password: DEMO_PASSWORD.into(),
        })
        .await
        .expect("demo sign in")
        .data
        .session
}

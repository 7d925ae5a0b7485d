use auth::{
    abstract_trait::auth::{IdentityServiceTrait, LoginServiceTrait, RegisterServiceTrait},
    policy::{AccessPolicy, RouteDecision},
    repository::{CredentialRepository, SessionStore},
    service::{IdentityService, LoginService, LoginServiceDeps, RegisterService, RegisterServiceDeps},
};
use prometheus_client::registry::Registry;
use shared::{
    config::Hashing,
    domain::requests::{SignInRequest, SignUpRequest},
    errors::{RepositoryError, ServiceError},
    model::Role,
};
use std::sync::Arc;
use user::{
    abstract_trait::user::service::UserCommandServiceTrait,
    domain::requests::UpdateUserRoleRequest,
    repository::{UserCommandRepository, UserQueryRepository, UserStore},
    service::{UserCommandService, UserQueryService},
};

struct Auth {
    register: RegisterService,
    login: LoginService,
    identity: IdentityService,
    users: Arc<UserCommandService>,
}

fn auth() -> Auth {
    let mut registry = Registry::default();
    let store = UserStore::new();
    let user_query_repo = Arc::new(UserQueryRepository::new(store.clone()));
    let user_command = Arc::new(UserCommandService::new(
        user_query_repo.clone(),
        Arc::new(UserCommandRepository::new(store)),
        &mut registry,
    ));
    let user_query = Arc::new(UserQueryService::new(user_query_repo, &mut registry));

    let hash = Arc::new(Hashing::new(4));
    let credentials = Arc::new(CredentialRepository::new());
    let sessions = Arc::new(SessionStore::new());

    Auth {
        register: RegisterService::new(
            RegisterServiceDeps {
                hash: hash.clone(),
                credentials: credentials.clone(),
                user_command: user_command.clone(),
            },
            &mut registry,
        ),
        login: LoginService::new(
            LoginServiceDeps {
                hash,
                credentials,
                sessions: sessions.clone(),
                user_query: user_query.clone(),
            },
            &mut registry,
        ),
        identity: IdentityService::new(sessions, user_query),
        users: user_command,
    }
}

fn sign_up(email: &str, role: Role) -> SignUpRequest {
    SignUpRequest {
        name: "Vendor User".into(),
        email: email.into(),
        password: "password".into(),
        role,
    }
}

fn sign_in(email: &str, password: &str) -> SignInRequest {
    SignInRequest {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn sign_up_then_sign_in_opens_session() {
    let auth = auth();
    let user = auth
        .register
        .sign_up(&sign_up("vendor@ecommerce.com", Role::Vendor))
        .await
        .unwrap()
        .data;

    let session = auth
        .login
        .sign_in(&sign_in("vendor@ecommerce.com", "password"))
        .await
        .unwrap()
        .data;

    assert_eq!(session.user, user);
    assert_eq!(session.home_path, "/vendor");

    let actor = auth.identity.current_actor(&session.session).await.unwrap();
    assert_eq!(actor.id, user.id);
    assert_eq!(
        AccessPolicy::new().decide(Some(&actor), "/vendor/products"),
        RouteDecision::Allow
    );
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_rejected() {
    let auth = auth();
    auth.register
        .sign_up(&sign_up("user@ecommerce.com", Role::User))
        .await
        .unwrap();

    let err = auth
        .login
        .sign_in(&sign_in("user@ecommerce.com", "not-the-password"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidCredentials));

    assert!(auth.login.authenticate("nobody@ecommerce.com", "password").await.is_none());
    assert!(auth.login.authenticate("USER@ecommerce.com", "password").await.is_some());
}

#[tokio::test]
async fn duplicate_sign_up_fails() {
    let auth = auth();
    auth.register
        .sign_up(&sign_up("jane.smith@example.com", Role::Vendor))
        .await
        .unwrap();

    let err = auth
        .register
        .sign_up(&sign_up("jane.smith@example.com", Role::User))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Repo(RepositoryError::AlreadyExists(_))));
}

#[tokio::test]
async fn short_password_fails_validation() {
    let auth = auth();
    let mut request = sign_up("john.doe@example.com", Role::User);
    request.password = "short".into();

    let err = auth.register.sign_up(&request).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn sign_out_ends_session() {
    let auth = auth();
    auth.register
        .sign_up(&sign_up("admin@ecommerce.com", Role::Admin))
        .await
        .unwrap();
    let session = auth
        .login
        .sign_in(&sign_in("admin@ecommerce.com", "password"))
        .await
        .unwrap()
        .data
        .session;

    assert!(auth.identity.sign_out(&session).await);
    assert!(!auth.identity.sign_out(&session).await);
    assert!(auth.identity.current_actor(&session).await.is_none());
    assert_eq!(
        AccessPolicy::new().decide(None, "/admin"),
        RouteDecision::Redirect("/login".into())
    );
}

#[tokio::test]
async fn role_change_applies_to_live_session() {
    let auth = auth();
    let user = auth
        .register
        .sign_up(&sign_up("john.doe@example.com", Role::User))
        .await
        .unwrap()
        .data;
    let session = auth
        .login
        .sign_in(&sign_in("john.doe@example.com", "password"))
        .await
        .unwrap()
        .data
        .session;

    assert!(
        auth.users
            .update_role(&UpdateUserRoleRequest {
                user_id: user.id,
                role: Role::Vendor,
            })
            .await
    );

    let actor = auth.identity.current_actor(&session).await.unwrap();
    assert_eq!(actor.role, Role::Vendor);
}

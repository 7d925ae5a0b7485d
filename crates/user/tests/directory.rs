use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    model::{Role, VendorStatus},
};
use std::sync::Arc;
use user::{
    abstract_trait::{
        user::service::{UserCommandServiceTrait, UserQueryServiceTrait},
        vendor::service::{VendorCommandServiceTrait, VendorQueryServiceTrait},
    },
    domain::requests::{
        CreateUserRequest, CreateVendorRequest, UpdateUserRoleRequest, UpdateVendorStatusRequest,
    },
    repository::{
        UserCommandRepository, UserQueryRepository, UserStore, VendorCommandRepository,
        VendorQueryRepository, VendorStore,
    },
    service::{UserCommandService, UserQueryService, VendorCommandService, VendorQueryService},
};

fn user_services() -> (UserCommandService, UserQueryService) {
    let store = UserStore::new();
    let mut registry = Registry::default();
    let query = Arc::new(UserQueryRepository::new(store.clone()));
    let command = Arc::new(UserCommandRepository::new(store));
    (
        UserCommandService::new(query.clone(), command, &mut registry),
        UserQueryService::new(query, &mut registry),
    )
}

fn vendor_services() -> (VendorCommandService, VendorQueryService) {
    let store = VendorStore::new();
    let mut registry = Registry::default();
    (
        VendorCommandService::new(Arc::new(VendorCommandRepository::new(store.clone())), &mut registry),
        VendorQueryService::new(Arc::new(VendorQueryRepository::new(store)), &mut registry),
    )
}

fn new_user(email: &str, role: Role) -> CreateUserRequest {
    CreateUserRequest {
        name: "John Doe".into(),
        email: email.into(),
        role,
    }
}

#[tokio::test]
async fn create_and_look_up_users() {
    let (command, query) = user_services();

    let created = command
        .create_user(&new_user("john.doe@example.com", Role::User))
        .await
        .unwrap()
        .data;

    let by_email = query.find_by_email("John.Doe@Example.com").await.unwrap().data;
    assert_eq!(by_email, created);
    assert_eq!(query.find_by_id(&created.id).await.unwrap().data.role, Role::User);
    assert!(query.find_by_id("missing").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let (command, query) = user_services();
    command
        .create_user(&new_user("admin@ecommerce.com", Role::Admin))
        .await
        .unwrap();

    let err = command
        .create_user(&new_user("ADMIN@ecommerce.com", Role::User))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Repo(RepositoryError::AlreadyExists(_))));
    assert_eq!(query.find_all().await.unwrap().data.len(), 1);
}

#[tokio::test]
async fn invalid_email_fails_validation() {
    let (command, _) = user_services();
    let err = command
        .create_user(&new_user("not-an-email", Role::User))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn update_role_reports_success_as_bool() {
    let (command, query) = user_services();
    let user = command
        .create_user(&new_user("user@ecommerce.com", Role::User))
        .await
        .unwrap()
        .data;

    assert!(
        command
            .update_role(&UpdateUserRoleRequest {
                user_id: user.id.clone(),
                role: Role::Vendor,
            })
            .await
    );
    let updated = query.find_by_id(&user.id).await.unwrap().data;
    assert_eq!(updated.role, Role::Vendor);
    assert!(updated.updated_at >= user.updated_at);

    assert!(
        !command
            .update_role(&UpdateUserRoleRequest {
                user_id: "missing".into(),
                role: Role::Admin,
            })
            .await
    );
}

#[tokio::test]
async fn vendor_registration_and_status() {
    let (command, query) = vendor_services();

    let vendor = command
        .register_vendor(&CreateVendorRequest {
            user_id: "6".into(),
            display_name: "Mike Johnson".into(),
            email: "mike@homegoods.com".into(),
            business_name: "Home & Garden Co".into(),
            status: VendorStatus::Pending,
        })
        .await
        .unwrap()
        .data;
    assert_eq!(vendor.id, "6");

    assert!(
        command
            .update_vendor_status(&UpdateVendorStatusRequest {
                vendor_id: "6".into(),
                status: VendorStatus::Active,
            })
            .await
    );
    assert_eq!(query.find_by_id("6").await.unwrap().data.status, VendorStatus::Active);

    assert!(
        !command
            .update_vendor_status(&UpdateVendorStatusRequest {
                vendor_id: "404".into(),
                status: VendorStatus::Suspended,
            })
            .await
    );
    assert_eq!(query.find_all().await.unwrap().data.len(), 1);
}

mod common;

use common::{ADMIN, JOHN, TECH_VENDOR, app_with, demo_app, sign_in};
use order::{domain::requests::UpdateOrderStatusRequest, model::OrderStatus};
use rust_decimal::Decimal;
use shared::{
    config::{Config, OrderTransitionPolicy},
    errors::ServiceError,
    model::{Role, VendorStatus},
};
use user::domain::requests::{UpdateUserRoleRequest, UpdateVendorStatusRequest};

fn set_status(order_id: &str, status: OrderStatus) -> UpdateOrderStatusRequest {
    UpdateOrderStatusRequest {
        order_id: order_id.into(),
        status,
    }
}

#[tokio::test]
async fn platform_dashboard_over_demo_data() {
    let app = demo_app().await;
    let session = sign_in(&app, ADMIN).await;

    let stats = app.admin().dashboard(&session).await.unwrap();

    assert_eq!(stats.total_users, 2);
    assert_eq!(stats.total_vendors, 3);
    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.total_products, 3);
    assert_eq!(stats.total_revenue, Decimal::new(114996, 2));

    let recent: Vec<&str> = stats.recent_orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(recent, ["ORD-003", "ORD-002", "ORD-001"]);
}

#[tokio::test]
async fn vendor_list_carries_derived_totals() {
    let app = demo_app().await;
    let session = sign_in(&app, ADMIN).await;

    let summaries = app.admin().vendors(&session).await.unwrap();
    let rows: Vec<(&str, usize, usize)> = summaries
        .iter()
        .map(|s| (s.vendor.business_name.as_str(), s.total_products, s.total_orders))
        .collect();

    assert_eq!(
        rows,
        [
            ("Tech Solutions Inc", 2, 2),
            ("Fashion Forward", 1, 1),
            ("Home & Garden Co", 0, 0),
        ]
    );
}

#[tokio::test]
async fn role_and_vendor_status_changes() {
    let app = demo_app().await;
    let session = sign_in(&app, ADMIN).await;
    let admin = app.admin();

    let john = app
        .di_container
        .user_query
        .find_by_email(JOHN)
        .await
        .unwrap()
        .data;
    assert!(
        admin
            .update_role(
                &session,
                &UpdateUserRoleRequest {
                    user_id: john.id,
                    role: Role::Vendor,
                },
            )
            .await
            .unwrap()
    );
    assert!(
        !admin
            .update_role(
                &session,
                &UpdateUserRoleRequest {
                    user_id: "missing".into(),
                    role: Role::Admin,
                },
            )
            .await
            .unwrap()
    );
    assert_eq!(admin.dashboard(&session).await.unwrap().total_users, 1);

    let activate = UpdateVendorStatusRequest {
        vendor_id: "6".into(),
        status: VendorStatus::Active,
    };
    assert!(admin.update_vendor_status(&session, &activate).await.unwrap());
    let vendors = admin.vendors(&session).await.unwrap();
    assert_eq!(vendors[2].vendor.status, VendorStatus::Active);
}

#[tokio::test]
async fn order_status_updates_are_booleans() {
    let app = demo_app().await;
    let session = sign_in(&app, ADMIN).await;
    let admin = app.admin();

    assert!(
        admin
            .update_order_status(&session, &set_status("ORD-002", OrderStatus::Shipped))
            .await
            .unwrap()
    );
    assert!(
        !admin
            .update_order_status(&session, &set_status("ORD-404", OrderStatus::Shipped))
            .await
            .unwrap()
    );

    // Permissive by default: a delivered order can be reopened.
    assert!(
        admin
            .update_order_status(&session, &set_status("ORD-001", OrderStatus::Pending))
            .await
            .unwrap()
    );

    let orders = admin.orders(&session).await.unwrap().data;
    assert_eq!(orders.len(), 3);
    assert_eq!(orders[1].status, OrderStatus::Shipped);
    assert_eq!(orders[0].status, OrderStatus::Pending);
}

#[tokio::test]
async fn strict_policy_blocks_reopening() {
    let config = Config {
        transition_policy: OrderTransitionPolicy::Strict,
        ..Config::default()
    };
    let app = app_with(config).await;
    let session = sign_in(&app, ADMIN).await;

    assert!(
        !app.admin()
            .update_order_status(&session, &set_status("ORD-001", OrderStatus::Pending))
            .await
            .unwrap()
    );
    assert!(
        app.admin()
            .update_order_status(&session, &set_status("ORD-003", OrderStatus::Delivered))
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn admin_panel_is_admin_only() {
    let app = demo_app().await;
    let vendor = sign_in(&app, TECH_VENDOR).await;

    let err = app.admin().users(&vendor).await.unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden(_)));
    let err = app.admin().delete_product(&vendor, "1").await.unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden(_)));
}

#[tokio::test]
async fn admin_manages_any_product_and_metrics_are_exposed() {
    let app = demo_app().await;
    let session = sign_in(&app, ADMIN).await;

    assert!(app.admin().delete_product(&session, "3").await.unwrap());
    assert_eq!(app.admin().products(&session).await.unwrap().data.len(), 2);
    assert_eq!(app.admin().users(&session).await.unwrap().data.len(), 5);

    let metrics = app.render_metrics().unwrap();
    assert!(metrics.contains("product_command_service_request_counter"));
    assert!(metrics.contains("login_service_request_counter"));
}

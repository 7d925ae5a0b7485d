mod common;

use auth::policy::RouteDecision;
use cart::domain::requests::UpdateCartQuantityRequest;
use common::{ADMIN, SHOPPER, TECH_VENDOR, app_with, demo_app, sign_in};
use order::model::OrderStatus;
use product::domain::requests::{FindAllProducts, ProductSort, UpdateProductRequest};
use rust_decimal::Decimal;
use shared::{
    config::Config,
    errors::{RepositoryError, ServiceError},
};
use storefront::domain::requests::AddToCartRequest;

fn add(product_id: &str, quantity: i32) -> AddToCartRequest {
    AddToCartRequest {
        product_id: product_id.into(),
        quantity,
    }
}

#[tokio::test]
async fn checkout_turns_cart_into_pending_order() {
    let app = demo_app().await;
    let shop = app.shop();
    let session = sign_in(&app, SHOPPER).await;

    shop.add_to_cart(&session, &add("1", 1)).await.unwrap();
    shop.add_to_cart(&session, &add("1", 1)).await.unwrap();
    let cart = shop.add_to_cart(&session, &add("2", 1)).await.unwrap().data;
    assert_eq!(cart.items.len(), 2);
    assert_eq!(cart.item_count, 3);
    assert_eq!(cart.total, Decimal::new(69997, 2));

    let order = shop.checkout(&session).await.unwrap().data;
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.buyer_id, "3");
    assert_eq!(order.buyer_email, SHOPPER);
    assert_eq!(order.total, Decimal::new(69997, 2));
    assert_eq!(order.items[0].quantity, 2);

    let cart = shop.cart(&session).await.unwrap().data;
    assert!(cart.items.is_empty());
    assert_eq!(cart.total, Decimal::ZERO);

    let mine = shop.my_orders(&session).await.unwrap().data;
    let ids: Vec<&str> = mine.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, [order.id.as_str(), "ORD-003", "ORD-001"]);
}

#[tokio::test]
async fn placed_order_keeps_checkout_prices() {
    let app = demo_app().await;
    let session = sign_in(&app, SHOPPER).await;

    app.shop().add_to_cart(&session, &add("1", 2)).await.unwrap();
    let placed = app.shop().checkout(&session).await.unwrap().data;
    assert_eq!(placed.total, Decimal::new(39998, 2));

    let vendor = sign_in(&app, TECH_VENDOR).await;
    let repriced = app
        .vendor()
        .update_product(
            &vendor,
            "1",
            &UpdateProductRequest {
                unit_price: Some(Decimal::new(9999, 2)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(repriced);

    let admin = sign_in(&app, ADMIN).await;
    assert!(
        app.admin()
            .update_product(
                &admin,
                "1",
                &UpdateProductRequest {
                    unit_price: Some(Decimal::new(150000, 2)),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
    );

    let mine = app.shop().my_orders(&session).await.unwrap().data;
    let stored = mine.iter().find(|o| o.id == placed.id).unwrap();
    assert_eq!(stored.items[0].unit_price, Decimal::new(19999, 2));
    assert_eq!(stored.total, Decimal::new(39998, 2));

    let all = app.admin().orders(&admin).await.unwrap().data;
    let seen_by_admin = all.iter().find(|o| o.id == placed.id).unwrap();
    assert_eq!(seen_by_admin, stored);
}

#[tokio::test]
async fn empty_cart_cannot_check_out() {
    let app = demo_app().await;
    let session = sign_in(&app, SHOPPER).await;

    let err = app.shop().checkout(&session).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let admin = sign_in(&app, ADMIN).await;
    assert_eq!(app.admin().orders(&admin).await.unwrap().data.len(), 3);
}

#[tokio::test]
async fn cart_quantity_edits() {
    let app = demo_app().await;
    let shop = app.shop();
    let session = sign_in(&app, SHOPPER).await;

    shop.add_to_cart(&session, &add("3", 1)).await.unwrap();
    let cart = shop
        .update_cart_quantity(
            &session,
            &UpdateCartQuantityRequest {
                product_id: "3".into(),
                quantity: 4,
            },
        )
        .await
        .unwrap()
        .data;
    assert_eq!(cart.item_count, 4);
    assert_eq!(cart.total, Decimal::new(179996, 2));

    let cart = shop
        .update_cart_quantity(
            &session,
            &UpdateCartQuantityRequest {
                product_id: "3".into(),
                quantity: 0,
            },
        )
        .await
        .unwrap()
        .data;
    assert!(cart.items.is_empty());

    shop.add_to_cart(&session, &add("1", 1)).await.unwrap();
    assert!(shop.remove_from_cart(&session, "1").await.unwrap().data.items.is_empty());
    assert!(shop.clear_cart(&session).await.unwrap().data.items.is_empty());
}

#[tokio::test]
async fn out_of_stock_products_cannot_be_added() {
    let app = demo_app().await;
    let admin = sign_in(&app, ADMIN).await;
    let session = sign_in(&app, SHOPPER).await;

    let sold_out = UpdateProductRequest {
        stock_quantity: Some(0),
        ..Default::default()
    };
    assert!(app.admin().update_product(&admin, "3", &sold_out).await.unwrap());

    let err = app.shop().add_to_cart(&session, &add("3", 1)).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::InsufficientStock { available: 0, .. })
    ));
    assert!(app.shop().cart(&session).await.unwrap().data.items.is_empty());
}

#[tokio::test]
async fn only_shoppers_use_the_cart() {
    let app = demo_app().await;
    let vendor = sign_in(&app, TECH_VENDOR).await;

    let err = app.shop().add_to_cart(&vendor, &add("1", 1)).await.unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden(_)));

    let err = app.shop().checkout("no-such-session").await.unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden(_)));
}

#[tokio::test]
async fn reservation_rolls_back_on_shortage() {
    let config = Config {
        reserve_stock_on_checkout: true,
        ..Config::default()
    };
    let app = app_with(config).await;
    let shop = app.shop();
    let session = sign_in(&app, SHOPPER).await;

    shop.add_to_cart(&session, &add("1", 2)).await.unwrap();
    shop.add_to_cart(&session, &add("3", 13)).await.unwrap();

    let err = shop.checkout(&session).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repo(RepositoryError::InsufficientStock { requested: 13, available: 12, .. })
    ));

    let catalog = &app.di_container.product_query;
    assert_eq!(catalog.find_by_id("1").await.unwrap().data.stock_quantity, 50);
    assert_eq!(catalog.find_by_id("3").await.unwrap().data.stock_quantity, 12);
    assert_eq!(shop.cart(&session).await.unwrap().data.item_count, 15);

    shop.update_cart_quantity(
        &session,
        &UpdateCartQuantityRequest {
            product_id: "3".into(),
            quantity: 12,
        },
    )
    .await
    .unwrap();
    shop.checkout(&session).await.unwrap();

    assert_eq!(catalog.find_by_id("1").await.unwrap().data.stock_quantity, 48);
    assert_eq!(catalog.find_by_id("3").await.unwrap().data.stock_quantity, 0);
}

#[tokio::test]
async fn browse_filters_and_sorts() {
    let app = demo_app().await;

    let filter = FindAllProducts {
        search: "fashion".into(),
        ..Default::default()
    };
    let found = app.shop().browse(&filter).await.unwrap().data;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Designer Jacket");

    let filter = FindAllProducts {
        category: "Electronics".into(),
        sort_by: ProductSort::PriceHigh,
        ..Default::default()
    };
    let names: Vec<String> = app
        .shop()
        .browse(&filter)
        .await
        .unwrap()
        .data
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["Smart Watch", "Wireless Headphones"]);
}

#[tokio::test]
async fn route_gate_redirects() {
    let app = demo_app().await;
    let gate = app.gate();
    let shopper = sign_in(&app, SHOPPER).await;

    assert_eq!(
        gate.visit(None, "/shop/cart").await,
        RouteDecision::Redirect("/login".into())
    );
    assert_eq!(
        gate.visit(Some(shopper.as_str()), "/admin").await,
        RouteDecision::Redirect("/shop".into())
    );
    assert_eq!(gate.visit(Some(shopper.as_str()), "/shop/orders").await, RouteDecision::Allow);

    assert!(app.di_container.identity.sign_out(&shopper).await);
    assert_eq!(
        gate.visit(Some(shopper.as_str()), "/shop").await,
        RouteDecision::Redirect("/login".into())
    );
}

//! Demo data: three shoppers and vendors, the admin, a small catalog and three orders.
//! Every demo account signs in with the password `password`.

use crate::di::DependenciesInject;
use anyhow::{Context, Result, anyhow};
use auth::model::Credential;
use chrono::{DateTime, TimeZone, Utc};
use order::model::{Order, OrderItem, OrderStatus};
use rust_decimal::Decimal;
use shared::model::{Product, Role, User, Vendor, VendorStatus};
use tracing::info;

pub const DEMO_PASSWORD: &str = "password";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub vendors: usize,
    pub products: usize,
    pub orders: usize,
}

fn date(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or_else(|| anyhow!("invalid seed date {year}-{month}-{day}"))
}

fn demo_users() -> Result<Vec<User>> {
    let rows = [
        ("1", "admin@ecommerce.com", "Admin User", Role::Admin, (2024, 1, 1)),
        ("2", "vendor@ecommerce.com", "Vendor User", Role::Vendor, (2024, 1, 15)),
        ("3", "user@ecommerce.com", "Regular User", Role::User, (2024, 2, 1)),
        ("4", "john.doe@example.com", "John Doe", Role::User, (2024, 2, 15)),
        ("5", "jane.smith@example.com", "Jane Smith", Role::Vendor, (2024, 3, 1)),
    ];

    rows.into_iter()
        .map(|(id, email, name, role, (y, m, d))| {
            let at = date(y, m, d)?;
            Ok(User {
                id: id.into(),
                email: email.into(),
                name: name.into(),
                role,
                created_at: at,
                updated_at: at,
            })
        })
        .collect()
}

fn demo_vendors() -> Result<Vec<Vendor>> {
    let rows = [
        ("2", "Vendor User", "vendor@ecommerce.com", "Tech Solutions Inc", VendorStatus::Active, (2024, 1, 15)),
        ("5", "Jane Smith", "jane.smith@example.com", "Fashion Forward", VendorStatus::Active, (2024, 3, 1)),
        ("6", "Mike Johnson", "mike@homegoods.com", "Home & Garden Co", VendorStatus::Pending, (2024, 3, 15)),
    ];

    rows.into_iter()
        .map(|(id, display_name, email, business_name, status, (y, m, d))| {
            Ok(Vendor {
                id: id.into(),
                display_name: display_name.into(),
                email: email.into(),
                business_name: business_name.into(),
                status,
                created_at: date(y, m, d)?,
            })
        })
        .collect()
}

fn demo_products() -> Result<Vec<Product>> {
    let rows = [
        (
            "1",
            "Wireless Headphones",
            "High-quality wireless headphones with noise cancellation",
            Decimal::new(19999, 2),
            "Electronics",
            50,
            ("2", "Tech Solutions Inc"),
            "/wireless-headphones.png",
            (2024, 2, 1),
        ),
        (
            "2",
            "Smart Watch",
            "Feature-rich smartwatch with health tracking",
            Decimal::new(29999, 2),
            "Electronics",
            25,
            ("2", "Tech Solutions Inc"),
            "/smartwatch-lifestyle.png",
            (2024, 2, 5),
        ),
        (
            "3",
            "Designer Jacket",
            "Premium leather jacket with modern styling",
            Decimal::new(44999, 2),
            "Fashion",
            12,
            ("5", "Fashion Forward"),
            "/classic-leather-jacket.png",
            (2024, 3, 1),
        ),
    ];

    rows.into_iter()
        .map(
            |(id, name, description, unit_price, category, stock, (vendor_id, vendor_name), image, (y, m, d))| {
                let at = date(y, m, d)?;
                Ok(Product {
                    id: id.into(),
                    name: name.into(),
                    description: description.into(),
                    unit_price,
                    category: category.into(),
                    stock_quantity: stock,
                    vendor_id: vendor_id.into(),
                    vendor_name: vendor_name.into(),
                    image_url: image.into(),
                    created_at: at,
                    updated_at: at,
                })
            },
        )
        .collect()
}

fn line(product_id: &str, product_name: &str, cents: i64) -> OrderItem {
    OrderItem {
        product_id: product_id.into(),
        product_name: product_name.into(),
        quantity: 1,
        unit_price: Decimal::new(cents, 2),
    }
}

fn demo_orders() -> Result<Vec<Order>> {
    let shopper = ("3", "Regular User", "user@ecommerce.com");
    let john = ("4", "John Doe", "john.doe@example.com");

    let rows = [
        (
            "ORD-001",
            shopper,
            vec![line("1", "Wireless Headphones", 19999)],
            OrderStatus::Delivered,
            (2024, 2, 10),
            (2024, 2, 15),
        ),
        (
            "ORD-002",
            john,
            vec![
                line("2", "Smart Watch", 29999),
                line("1", "Wireless Headphones", 19999),
            ],
            OrderStatus::Processing,
            (2024, 3, 5),
            (2024, 3, 6),
        ),
        (
            "ORD-003",
            shopper,
            vec![line("3", "Designer Jacket", 44999)],
            OrderStatus::Shipped,
            (2024, 3, 10),
            (2024, 3, 12),
        ),
    ];

    rows.into_iter()
        .map(|(id, (buyer_id, buyer_name, buyer_email), items, status, created, updated)| {
            Ok(Order {
                id: id.into(),
                buyer_id: buyer_id.into(),
                buyer_name: buyer_name.into(),
                buyer_email: buyer_email.into(),
                total: Order::items_total(&items)
                    .with_context(|| format!("pricing demo order {id}"))?,
                items,
                status,
                created_at: date(created.0, created.1, created.2)?,
                updated_at: date(updated.0, updated.1, updated.2)?,
            })
        })
        .collect()
}

/// Loads the demo records through the raw repositories so they keep their fixed ids.
pub async fn seed_demo_data(di: &DependenciesInject) -> Result<SeedSummary> {
    let seed = &di.seed;

    let users = demo_users()?;
    let password_hash = seed
        .hash
        .hash_password(DEMO_PASSWORD)
        .await
        .context("Failed to hash demo password")?;

    for user in &users {
        seed.users
            .insert_user(user.clone())
            .await
            .with_context(|| format!("Failed to seed user {}", user.email))?;
        seed.credentials
            .store_credential(Credential {
                user_id: user.id.clone(),
                email: user.email.clone(),
                password_hash: password_hash.clone(),
            })
            .await
            .with_context(|| format!("Failed to seed credential of {}", user.email))?;
    }

    let vendors = demo_vendors()?;
    for vendor in &vendors {
        seed.vendors
            .insert_vendor(vendor.clone())
            .await
            .with_context(|| format!("Failed to seed vendor {}", vendor.id))?;
    }

    let products = demo_products()?;
    for product in &products {
        seed.products
            .insert_product(product.clone())
            .await
            .with_context(|| format!("Failed to seed product {}", product.id))?;
    }

    let orders = demo_orders()?;
    for order in &orders {
        seed.orders
            .append(order.clone())
            .await
            .with_context(|| format!("Failed to seed order {}", order.id))?;
    }

    info!("🌱 Seeded demo accounts with password '{DEMO_PASSWORD}'");

    Ok(SeedSummary {
        users: users.len(),
        vendors: vendors.len(),
        products: products.len(),
        orders: orders.len(),
    })
}

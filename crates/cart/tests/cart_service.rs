use async_trait::async_trait;
use cart::{
    abstract_trait::cart::{BlobStoreTrait, CartServiceTrait},
    domain::requests::{AddCartItemRequest, UpdateCartQuantityRequest},
    repository::{CartRepository, InMemoryBlobStore},
    service::CartService,
};
use prometheus_client::registry::Registry;
use rust_decimal::Decimal;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Status},
};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

fn service_with(store: Arc<dyn BlobStoreTrait + Send + Sync>) -> CartService {
    let mut registry = Registry::default();
    CartService::new(Arc::new(CartRepository::new(store)), &mut registry)
}

fn add(product_id: &str, price: Decimal, quantity: i32) -> AddCartItemRequest {
    AddCartItemRequest {
        product_id: product_id.into(),
        product_name: format!("Product {product_id}"),
        unit_price: price,
        image_url: String::new(),
        vendor_name: "Tech Solutions Inc".into(),
        quantity,
    }
}

#[tokio::test]
async fn add_twice_merges_and_persists() {
    let service = service_with(Arc::new(InMemoryBlobStore::new()));

    service
        .add_item("3", &add("P1", Decimal::from(10), 1))
        .await
        .unwrap();
    let cart = service
        .add_item("3", &add("P1", Decimal::from(10), 1))
        .await
        .unwrap()
        .data;

    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 2);
    assert_eq!(cart.total, Decimal::from(20));

    let reloaded = service.get_cart("3").await.unwrap().data;
    assert_eq!(reloaded, cart);
}

#[tokio::test]
async fn price_above_ceiling_is_rejected() {
    let service = service_with(Arc::new(InMemoryBlobStore::new()));

    let err = service
        .add_item("3", &add("P1", Decimal::MAX, 2))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(service.get_cart("3").await.unwrap().data.items.is_empty());
}

#[tokio::test]
async fn update_to_zero_empties_the_cart() {
    let service = service_with(Arc::new(InMemoryBlobStore::new()));
    service
        .add_item("3", &add("P1", Decimal::new(19999, 2), 1))
        .await
        .unwrap();

    let cart = service
        .update_quantity(
            "3",
            &UpdateCartQuantityRequest {
                product_id: "P1".into(),
                quantity: 0,
            },
        )
        .await
        .unwrap()
        .data;

    assert!(cart.items.is_empty());
    assert_eq!(cart.item_count, 0);
    assert_eq!(cart.total, Decimal::ZERO);
}

#[tokio::test]
async fn clear_twice_is_fine() {
    let service = service_with(Arc::new(InMemoryBlobStore::new()));
    service
        .add_item("3", &add("P1", Decimal::ONE, 4))
        .await
        .unwrap();

    let first = service.clear("3").await.unwrap().data;
    let second = service.clear("3").await.unwrap().data;

    assert!(first.items.is_empty());
    assert!(second.items.is_empty());
    assert_eq!(second.item_count, 0);
}

#[tokio::test]
async fn negative_price_is_rejected() {
    let service = service_with(Arc::new(InMemoryBlobStore::new()));

    let err = service
        .add_item("3", &add("P1", Decimal::from(-1), 1))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(service.get_cart("3").await.unwrap().data.items.is_empty());
}

#[tokio::test]
async fn operations_are_recorded_in_metrics() {
    let service = service_with(Arc::new(InMemoryBlobStore::new()));

    service
        .add_item("3", &add("P1", Decimal::ONE, 1))
        .await
        .unwrap();
    service.remove_item("3", "P1").await.unwrap();

    assert_eq!(service.metrics().count(Method::Post, Status::Success), 1);
    assert_eq!(service.metrics().count(Method::Delete, Status::Success), 1);
}

/// Accepts reads, fails writes once `broken` is set.
#[derive(Default)]
struct FlakyBlobStore {
    inner: InMemoryBlobStore,
    broken: AtomicBool,
}

#[async_trait]
impl BlobStoreTrait for FlakyBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: String) -> Result<(), RepositoryError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(RepositoryError::Custom("disk full".into()));
        }
        self.inner.put(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(RepositoryError::Custom("disk full".into()));
        }
        self.inner.remove(key).await
    }
}

#[tokio::test]
async fn failed_write_leaves_prior_cart_unchanged() {
    let store = Arc::new(FlakyBlobStore::default());
    let service = service_with(store.clone());

    service
        .add_item("3", &add("P1", Decimal::from(5), 2))
        .await
        .unwrap();

    store.broken.store(true, Ordering::SeqCst);

    let err = service
        .add_item("3", &add("P2", Decimal::from(7), 1))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Repo(RepositoryError::Custom(_))));
    assert_eq!(service.metrics().count(Method::Post, Status::Error), 1);

    let cart = service.get_cart("3").await.unwrap().data;
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.total, Decimal::from(10));
}

use crate::{abstract_trait::product::repository::ProductQueryRepositoryTrait, repository::ProductStore};
use async_trait::async_trait;
use shared::{errors::RepositoryError, model::Product as ProductModel};
use tracing::info;

#[derive(Clone)]
pub struct ProductQueryRepository {
    store: ProductStore,
}

impl ProductQueryRepository {
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        let products = self.store.products.read().await;
        info!("🔍 Fetched {} products", products.len());
        Ok(products.clone())
    }

    async fn find_by_vendor(&self, vendor_id: &str) -> Result<Vec<ProductModel>, RepositoryError> {
        let products = self.store.products.read().await;
        Ok(products
            .iter()
            .filter(|p| p.vendor_id == vendor_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ProductModel>, RepositoryError> {
        let products = self.store.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }
}

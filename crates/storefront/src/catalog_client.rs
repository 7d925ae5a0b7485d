use async_trait::async_trait;
use order::abstract_trait::catalog_client::CatalogClientTrait;
use product::abstract_trait::product::service::DynProductQueryService;
use shared::{errors::ServiceError, model::Product};

/// Serves order scoping from the in-process product catalog.
#[derive(Clone)]
pub struct ProductCatalogClient {
    query: DynProductQueryService,
}

impl ProductCatalogClient {
    pub fn new(query: DynProductQueryService) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CatalogClientTrait for ProductCatalogClient {
    async fn find_products_by_vendor(&self, vendor_id: &str) -> Result<Vec<Product>, ServiceError> {
        let response = self.query.list_vendor_products(vendor_id).await?;
        Ok(response.data)
    }
}

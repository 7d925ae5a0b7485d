use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::requests::{ALL_CATEGORIES, FindAllProducts, ProductSort},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::responses::ApiResponse,
    errors::ServiceError,
    model::Product,
    utils::{Method, Metrics, TracingContext},
};
use tracing::info;

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_query_service", registry);

        Self { query, metrics }
    }

    fn complete_tracing<T>(
        &self,
        tracing_ctx: TracingContext,
        result: Result<T, ServiceError>,
        message: &str,
    ) -> Result<T, ServiceError> {
        match &result {
            Ok(_) => tracing_ctx.complete(&self.metrics, Method::Get, true, message),
            Err(e) => tracing_ctx.complete(&self.metrics, Method::Get, false, &e.to_string()),
        }
        result
    }
}

/// Case-insensitive match on name, description or vendor name, then an exact category
/// match unless the category is `All`, then a stable sort.
pub fn filter_products(products: Vec<Product>, req: &FindAllProducts) -> Vec<Product> {
    let needle = req.search.trim().to_lowercase();

    let mut filtered: Vec<Product> = products
        .into_iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.vendor_name.to_lowercase().contains(&needle)
        })
        .filter(|p| req.category == ALL_CATEGORIES || p.category == req.category)
        .collect();

    match req.sort_by {
        ProductSort::PriceLow => filtered.sort_by(|a, b| a.unit_price.cmp(&b.unit_price)),
        ProductSort::PriceHigh => filtered.sort_by(|a, b| b.unit_price.cmp(&a.unit_price)),
        ProductSort::Name => filtered.sort_by_key(|p| p.name.to_lowercase()),
        ProductSort::Newest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    filtered
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn list_products(&self) -> Result<ApiResponse<Vec<Product>>, ServiceError> {
        let tracing_ctx = TracingContext::start("product", "list_products");

        let result = self
            .query
            .find_all()
            .await
            .map(|products| ApiResponse::success("Products retrieved successfully", products))
            .map_err(ServiceError::from);

        self.complete_tracing(tracing_ctx, result, "Products retrieved")
    }

    async fn list_vendor_products(
        &self,
        vendor_id: &str,
    ) -> Result<ApiResponse<Vec<Product>>, ServiceError> {
        info!("🔍 Listing products of vendor {vendor_id}");
        let tracing_ctx = TracingContext::start("product", "list_vendor_products");

        let result = self
            .query
            .find_by_vendor(vendor_id)
            .await
            .map(|products| ApiResponse::success("Vendor products retrieved successfully", products))
            .map_err(ServiceError::from);

        self.complete_tracing(tracing_ctx, result, "Vendor products retrieved")
    }

    async fn browse(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponse<Vec<Product>>, ServiceError> {
        info!(
            "🔍 Browsing products | search: '{}', category: {}, sort: {:?}",
            req.search, req.category, req.sort_by
        );
        let tracing_ctx = TracingContext::start("product", "browse");

        let result = self
            .query
            .find_all()
            .await
            .map(|products| {
                ApiResponse::success("Products retrieved successfully", filter_products(products, req))
            })
            .map_err(ServiceError::from);

        self.complete_tracing(tracing_ctx, result, "Products browsed")
    }

    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<Product>, ServiceError> {
        let tracing_ctx = TracingContext::start("product", "find_product_by_id");

        let result = match self.query.find_by_id(id).await {
            Ok(Some(product)) => Ok(ApiResponse::success("Product retrieved successfully", product)),
            Ok(None) => Err(ServiceError::NotFound(format!("product {id}"))),
            Err(e) => Err(ServiceError::from(e)),
        };

        self.complete_tracing(tracing_ctx, result, "Product retrieved")
    }
}

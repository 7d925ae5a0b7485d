use crate::{
    abstract_trait::{
        catalog_client::DynCatalogClient,
        order::repository::DynOrderQueryRepository,
        scoping::OrderScopingServiceTrait,
    },
    domain::response::{TopProductResponse, VendorOrderResponse},
    model::{Order, OrderItem},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use rust_decimal::Decimal;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext, checked_sum},
};
use std::collections::{HashMap, HashSet};
use tracing::info;

/// Sum of the order lines whose product is in `vendor_product_ids`.
pub fn vendor_order_subtotal(
    order: &Order,
    vendor_product_ids: &HashSet<String>,
) -> Result<Decimal, ServiceError> {
    checked_sum(
        order
            .items
            .iter()
            .filter(|item| vendor_product_ids.contains(&item.product_id))
            .map(OrderItem::subtotal),
    )
}

fn involves_vendor(order: &Order, vendor_product_ids: &HashSet<String>) -> bool {
    order
        .items
        .iter()
        .any(|item| vendor_product_ids.contains(&item.product_id))
}

/// Vendor and platform views over the order log. Ownership of an order line is decided by
/// the catalog at query time.
#[derive(Clone)]
pub struct OrderScopingService {
    query: DynOrderQueryRepository,
    catalog: DynCatalogClient,
    metrics: Metrics,
}

impl OrderScopingService {
    pub fn new(
        query: DynOrderQueryRepository,
        catalog: DynCatalogClient,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("order_scoping_service", registry);

        Self {
            query,
            catalog,
            metrics,
        }
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

    async fn vendor_product_ids(&self, vendor_id: &str) -> Result<HashSet<String>, ServiceError> {
        let products = self.catalog.find_products_by_vendor(vendor_id).await?;
        Ok(products.into_iter().map(|p| p.id).collect())
    }

    async fn try_vendor_orders(
        &self,
        vendor_id: &str,
    ) -> Result<Vec<VendorOrderResponse>, ServiceError> {
        let ids = self.vendor_product_ids(vendor_id).await?;
        let orders = self.query.find_all().await?;

        orders
            .into_iter()
            .filter(|order| involves_vendor(order, &ids))
            .map(|order| {
                Ok::<_, ServiceError>(VendorOrderResponse {
                    vendor_subtotal: vendor_order_subtotal(&order, &ids)?,
                    order,
                })
            })
            .collect()
    }

    async fn try_top_selling(
        &self,
        vendor_id: &str,
        limit: usize,
    ) -> Result<Vec<TopProductResponse>, ServiceError> {
        let products = self.catalog.find_products_by_vendor(vendor_id).await?;
        let orders = self.query.find_all().await?;

        let mut sold: HashMap<&str, i64> = HashMap::new();
        for item in orders.iter().flat_map(|o| o.items.iter()) {
            *sold.entry(item.product_id.as_str()).or_default() += i64::from(item.quantity);
        }

        let mut ranked: Vec<TopProductResponse> = products
            .into_iter()
            .map(|product| TopProductResponse {
                quantity_sold: sold.get(product.id.as_str()).copied().unwrap_or(0),
                product,
            })
            .collect();

        // Stable: ties keep catalog order.
        ranked.sort_by(|a, b| b.quantity_sold.cmp(&a.quantity_sold));
        ranked.truncate(limit);
        Ok(ranked)
    }
}

#[async_trait]
impl OrderScopingServiceTrait for OrderScopingService {
    async fn vendor_orders(&self, vendor_id: &str) -> Result<Vec<VendorOrderResponse>, ServiceError> {
        info!("🔍 Scoping orders to vendor {vendor_id}");
        let tracing_ctx = TracingContext::start("order", "vendor_orders");

        let result = self.try_vendor_orders(vendor_id).await;

        self.complete_tracing(tracing_ctx, result, "Vendor orders retrieved")
    }

    async fn vendor_order_subtotal(
        &self,
        order: &Order,
        vendor_id: &str,
    ) -> Result<Decimal, ServiceError> {
        let ids = self.vendor_product_ids(vendor_id).await?;
        vendor_order_subtotal(order, &ids)
    }

    async fn vendor_revenue(&self, vendor_id: &str) -> Result<Decimal, ServiceError> {
        let tracing_ctx = TracingContext::start("order", "vendor_revenue");

        let result = self
            .try_vendor_orders(vendor_id)
            .await
            .and_then(|orders| checked_sum(orders.iter().map(|o| Ok(o.vendor_subtotal))));

        self.complete_tracing(tracing_ctx, result, "Vendor revenue computed")
    }

    async fn top_selling_products(
        &self,
        vendor_id: &str,
        limit: usize,
    ) -> Result<Vec<TopProductResponse>, ServiceError> {
        let tracing_ctx = TracingContext::start("order", "top_selling_products");

        let result = self.try_top_selling(vendor_id, limit).await;

        self.complete_tracing(tracing_ctx, result, "Top products ranked")
    }

    async fn platform_revenue(&self) -> Result<Decimal, ServiceError> {
        let tracing_ctx = TracingContext::start("order", "platform_revenue");

        let result = self
            .query
            .find_all()
            .await
            .map_err(ServiceError::from)
            .and_then(|orders| checked_sum(orders.iter().map(|o| Ok(o.total))));

        self.complete_tracing(tracing_ctx, result, "Platform revenue computed")
    }
}

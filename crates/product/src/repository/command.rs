use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    repository::ProductStore,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::{errors::RepositoryError, model::Product as ProductModel, utils::generate_id};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    store: ProductStore,
}

impl ProductCommandRepository {
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }
}

fn placeholder_image(name: &str) -> String {
    format!(
        "/placeholder.svg?height=400&width=400&query={}",
        name.trim().replace(' ', "+")
    )
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let now = Utc::now();
        let image_url = match req.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => placeholder_image(&req.name),
        };

        let product = ProductModel {
            id: generate_id(),
            name: req.name.clone(),
            description: req.description.clone(),
            unit_price: req.unit_price,
            category: req.category.clone(),
            stock_quantity: req.stock_quantity,
            vendor_id: req.vendor_id.clone(),
            vendor_name: req.vendor_name.clone(),
            image_url,
            created_at: now,
            updated_at: now,
        };

        self.insert_product(product).await
    }

    async fn insert_product(&self, product: ProductModel) -> Result<ProductModel, RepositoryError> {
        let mut products = self.store.products.write().await;

        if products.iter().any(|p| p.id == product.id) {
            error!("❌ Product {} already exists", product.id);
            return Err(RepositoryError::AlreadyExists(format!(
                "product {}",
                product.id
            )));
        }

        info!("📦 Product {} stored for vendor {}", product.id, product.vendor_id);
        products.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: &str,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut products = self.store.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = &req.name {
            product.name = name.clone();
        }
        if let Some(description) = &req.description {
            product.description = description.clone();
        }
        if let Some(unit_price) = req.unit_price {
            product.unit_price = unit_price;
        }
        if let Some(category) = &req.category {
            product.category = category.clone();
        }
        if let Some(stock_quantity) = req.stock_quantity {
            product.stock_quantity = stock_quantity;
        }
        if let Some(image_url) = &req.image_url {
            product.image_url = image_url.clone();
        }
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    async fn increasing_stock(&self, id: &str, qty: i32) -> Result<ProductModel, RepositoryError> {
        let mut products = self.store.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        product.stock_quantity = product.stock_quantity.saturating_add(qty);
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    async fn decreasing_stock(&self, id: &str, qty: i32) -> Result<ProductModel, RepositoryError> {
        let mut products = self.store.products.write().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        // Check and decrement under the same write lock.
        if product.stock_quantity < qty {
            return Err(RepositoryError::InsufficientStock {
                product_id: id.to_string(),
                requested: qty,
                available: product.stock_quantity,
            });
        }

        product.stock_quantity -= qty;
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    async fn delete_product(&self, id: &str) -> Result<(), RepositoryError> {
        let mut products = self.store.products.write().await;
        let idx = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        products.remove(idx);
        info!("🗑️ Product {id} deleted");
        Ok(())
    }
}

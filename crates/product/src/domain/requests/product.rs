use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::utils::validate_unit_price;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(custom(function = "validate_unit_price"))]
    #[serde(rename = "unit_price")]
    pub unit_price: Decimal,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[serde(rename = "stock_quantity")]
    pub stock_quantity: i32,

    #[validate(length(min = 1))]
    #[serde(rename = "vendor_id")]
    pub vendor_id: String,

    #[serde(rename = "vendor_name")]
    pub vendor_name: String,

    #[serde(default, rename = "image_url")]
    pub image_url: Option<String>,
}

/// Partial update: only the fields that are `Some` are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Product name cannot be empty"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(custom(function = "validate_unit_price"))]
    pub unit_price: Option<Decimal>,

    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: Option<String>,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock_quantity: Option<i32>,

    pub image_url: Option<String>,
}

impl UpdateProductRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.unit_price.is_none()
            && self.category.is_none()
            && self.stock_quantity.is_none()
            && self.image_url.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProductSort {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "price-low")]
    PriceLow,
    #[serde(rename = "price-high")]
    PriceHigh,
    #[serde(rename = "newest")]
    Newest,
}

/// Storefront browse filter. An empty search and the `All` category mean "no filter".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindAllProducts {
    #[serde(default)]
    pub search: String,

    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default, rename = "sort_by")]
    pub sort_by: ProductSort,
}

impl Default for FindAllProducts {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: default_category(),
            sort_by: ProductSort::default(),
        }
    }
}

pub const ALL_CATEGORIES: &str = "All";

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

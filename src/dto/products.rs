use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Category, Product};

/// Admin product form. Used for both create and full-record update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 3.49)]
    pub price: Decimal,
    pub weight: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub discount: Option<u8>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<Category>)]
    pub items: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CatalogStats {
    pub total_products: usize,
    pub total_categories: usize,
    /// Head of the catalog, shown as "Recent Products" on the dashboard.
    pub recent: Vec<Product>,
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 2.99)]
    pub price: Decimal,
    /// Free-text size label such as "1 gallon" or "6 rolls".
    pub weight: String,
    pub image: String,
    /// Percent off, shown as a badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
}

/// A product snapshot plus how many of it are in the cart.
///
/// Stored and served as one flat record: every product field next to
/// `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 2.99)]
    pub price: Decimal,
    pub weight: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            price: product.price,
            weight: product.weight,
            image: product.image,
            discount: product.discount,
            quantity: 1,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Icon name understood by the front-end icon set.
    pub icon: String,
}

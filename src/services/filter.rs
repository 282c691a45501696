use crate::{defaults::ALL_CATEGORIES, models::Product};

/// Category and name search over a product list.
///
/// Filtering is stable: matches keep their relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    category: Option<String>,
    query: String,
}

impl ProductFilter {
    /// `category` of `"All"` disables the category predicate; an empty
    /// `query` disables the name predicate.
    pub fn new(category: &str, query: &str) -> Self {
        Self::default().category(category).query(query)
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = (category != ALL_CATEGORIES).then(|| category.to_string());
        self
    }

    pub fn query(mut self, query: &str) -> Self {
        self.query = query.to_lowercase();
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|category| product.category == category);
        let query_ok =
            self.query.is_empty() || product.name.to_lowercase().contains(&self.query);
        category_ok && query_ok
    }

    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }
}

pub fn filter_products(products: &[Product], category: &str, query: &str) -> Vec<Product> {
    ProductFilter::new(category, query).apply(products)
}

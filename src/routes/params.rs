use serde::Deserialize;
use utoipa::IntoParams;

use crate::{defaults::ALL_CATEGORIES, services::filter::ProductFilter};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogQuery {
    /// Exact category name, or `All`.
    pub category: Option<String>,
    /// Case-insensitive name search.
    pub q: Option<String>,
}

impl CatalogQuery {
    pub fn to_filter(&self) -> ProductFilter {
        ProductFilter::new(
            self.category.as_deref().unwrap_or(ALL_CATEGORIES),
            self.q.as_deref().unwrap_or_default(),
        )
    }
}

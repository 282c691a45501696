use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::CartEntry,
    money::{CartTotals, format_currency},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: String,
}

/// Totals rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FormattedTotals {
    pub subtotal: String,
    /// `"FREE"` when the delivery threshold is passed.
    pub delivery_fee: String,
    pub grand_total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CartSummary {
    pub items: Vec<CartEntry>,
    pub totals: CartTotals,
    pub formatted: FormattedTotals,
}

impl CartSummary {
    pub fn from_entries(items: Vec<CartEntry>) -> Self {
        let totals = CartTotals::from_entries(&items);
        let formatted = FormattedTotals {
            subtotal: format_currency(totals.subtotal),
            delivery_fee: if totals.free_delivery {
                "FREE".to_string()
            } else {
                format_currency(totals.delivery_fee)
            },
            grand_total: format_currency(totals.grand_total),
        };
        Self {
            items,
            totals,
            formatted,
        }
    }
}

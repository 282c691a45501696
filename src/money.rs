//! Currency arithmetic and display.
//!
//! Amounts are `Decimal` everywhere; rounding only happens when formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::CartEntry;

/// Subtotals strictly above this ship for free.
pub const FREE_DELIVERY_THRESHOLD: Decimal = dec!(50.00);
pub const DELIVERY_FEE: Decimal = dec!(5.99);

/// Round to cents, halves away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format as US dollars, e.g. `$1,234.50`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_cents(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", rounded.abs());
    let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents}")
}

pub fn delivery_fee(subtotal: Decimal) -> Decimal {
    if subtotal > FREE_DELIVERY_THRESHOLD {
        Decimal::ZERO
    } else {
        DELIVERY_FEE
    }
}

/// Figures derived from a cart snapshot. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CartTotals {
    pub total_count: u32,
    #[schema(value_type = f64)]
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub subtotal: Decimal,
    #[schema(value_type = f64)]
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub delivery_fee: Decimal,
    #[schema(value_type = f64)]
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub grand_total: Decimal,
    pub free_delivery: bool,
}

impl CartTotals {
    pub fn from_entries(entries: &[CartEntry]) -> Self {
        let total_count = entries.iter().map(|entry| entry.quantity).sum();
        let subtotal: Decimal = entries.iter().map(CartEntry::line_total).sum();
        let delivery_fee = delivery_fee(subtotal);
        Self {
            total_count,
            subtotal,
            delivery_fee,
            grand_total: subtotal + delivery_fee,
            free_delivery: delivery_fee.is_zero(),
        }
    }
}

use buyit_storefront::{
    defaults,
    models::CartEntry,
    money::{CartTotals, delivery_fee, format_currency, round_cents},
};
use rust_decimal_macros::dec;

fn entry(price: rust_decimal::Decimal, quantity: u32) -> CartEntry {
    CartEntry {
        price,
        quantity,
        ..CartEntry::new(defaults::products().remove(0))
    }
}

#[test]
fn totals_for_small_cart_include_delivery() {
    let totals = CartTotals::from_entries(&[entry(dec!(2.99), 2), entry(dec!(10), 1)]);

    assert_eq!(totals.total_count, 3);
    assert_eq!(totals.subtotal, dec!(15.98));
    assert_eq!(totals.delivery_fee, dec!(5.99));
    assert_eq!(totals.grand_total, dec!(21.97));
    assert!(!totals.free_delivery);
}

#[test]
fn delivery_is_free_only_above_threshold() {
    assert_eq!(delivery_fee(dec!(50.00)), dec!(5.99));
    assert_eq!(delivery_fee(dec!(50.01)), dec!(0));

    let totals = CartTotals::from_entries(&[entry(dec!(12.50), 5)]);
    assert_eq!(totals.subtotal, dec!(62.50));
    assert_eq!(totals.grand_total, dec!(62.50));
    assert!(totals.free_delivery);
}

#[test]
fn empty_cart_still_charges_delivery() {
    let totals = CartTotals::from_entries(&[]);
    assert_eq!(totals.total_count, 0);
    assert_eq!(totals.subtotal, dec!(0));
    assert_eq!(totals.grand_total, dec!(5.99));
}

#[test]
fn rounding_is_half_up() {
    assert_eq!(round_cents(dec!(1.005)), dec!(1.01));
    assert_eq!(round_cents(dec!(1.015)), dec!(1.02));
    assert_eq!(round_cents(dec!(1.004)), dec!(1.00));
    assert_eq!(round_cents(dec!(-1.005)), dec!(-1.01));
}

#[test]
fn currency_formatting() {
    assert_eq!(format_currency(dec!(0)), "$0.00");
    assert_eq!(format_currency(dec!(3.5)), "$3.50");
    assert_eq!(format_currency(dec!(21.97)), "$21.97");
    assert_eq!(format_currency(dec!(1234.5)), "$1,234.50");
    assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
    assert_eq!(format_currency(dec!(-7.125)), "-$7.13");
}

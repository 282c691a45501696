//! Reference data shipped with the store.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Category, Product};

/// Pseudo-category that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

pub fn categories() -> Vec<Category> {
    [
        ("cat_1", "Fruits & Veg", "carrot"),
        ("cat_2", "Dairy & Bakery", "croissant"),
        ("cat_3", "Snacks", "popcorn"),
        ("cat_4", "Beverages", "cup-soda"),
        ("cat_5", "Household", "spray-can"),
        ("cat_6", "Personal Care", "sparkles"),
    ]
    .into_iter()
    .map(|(id, name, icon)| Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

pub fn is_known_category(name: &str) -> bool {
    categories().iter().any(|category| category.name == name)
}

/// Placeholder image used when a product is saved without one. The seed is
/// percent-encoded as a single path segment.
pub fn placeholder_image(seed: &str) -> String {
    format!(
        "https://picsum.photos/seed/{}/400/400",
        urlencoding::encode(seed.trim())
    )
}

pub fn products() -> Vec<Product> {
    vec![
        product("p1", "Fresh Avocado", "Fruits & Veg", dec!(2.99), "2 pcs", "avocado", Some(10)),
        product("p2", "Organic Bananas", "Fruits & Veg", dec!(1.49), "1 bunch", "banana", None),
        product("p3", "Whole Milk", "Dairy & Bakery", dec!(3.50), "1 gallon", "milk", None),
        product("p4", "Sourdough Bread", "Dairy & Bakery", dec!(5.00), "1 loaf", "bread", None),
        product("p5", "Potato Chips", "Snacks", dec!(4.20), "200g", "chips", Some(5)),
        product("p6", "Orange Juice", "Beverages", dec!(6.00), "1L", "juice", None),
        product("p7", "Paper Towels", "Household", dec!(8.99), "6 rolls", "paper", None),
        product("p8", "Shampoo", "Personal Care", dec!(12.50), "500ml", "shampoo", None),
    ]
}

fn product(
    id: &str,
    name: &str,
    category: &str,
    price: Decimal,
    weight: &str,
    image_seed: &str,
    discount: Option<u8>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        weight: weight.to_string(),
        image: placeholder_image(image_seed),
        discount,
    }
}

use buyit_storefront::{
    defaults,
    models::Product,
    services::filter::{ProductFilter, filter_products},
};

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn all_with_empty_query_returns_everything_in_order() {
    let products = defaults::products();
    let filtered = filter_products(&products, "All", "");
    assert_eq!(filtered, products);
}

#[test]
fn category_match_is_exact_and_case_sensitive() {
    let products = defaults::products();
    assert_eq!(ids(&filter_products(&products, "Fruits & Veg", "")), vec!["p1", "p2"]);
    assert!(filter_products(&products, "fruits & veg", "").is_empty());
}

#[test]
fn query_is_case_insensitive_substring() {
    let products = defaults::products();
    assert_eq!(ids(&filter_products(&products, "All", "MILK")), vec!["p3"]);
    assert_eq!(ids(&filter_products(&products, "All", "an")), vec!["p2", "p6"]);
}

#[test]
fn filters_compose_in_either_order() {
    let mut products = defaults::products();
    let avocado = products[0].clone();
    products.push(Product {
        id: "p9".to_string(),
        name: "Organic Apples".to_string(),
        ..avocado
    });

    let category_first = ProductFilter::new("All", "organic")
        .apply(&ProductFilter::new("Fruits & Veg", "").apply(&products));
    let query_first = ProductFilter::new("Fruits & Veg", "")
        .apply(&ProductFilter::new("All", "organic").apply(&products));
    let combined = filter_products(&products, "Fruits & Veg", "organic");

    assert_eq!(category_first, query_first);
    assert_eq!(combined, category_first);
    assert_eq!(ids(&combined), vec!["p2", "p9"]);
}

#[test]
fn no_match_yields_empty_list() {
    let products = defaults::products();
    assert!(filter_products(&products, "Snacks", "milk").is_empty());
}

use buyit_storefront::{
    defaults,
    dto::products::ProductInput,
    error::AppError,
    events::{EventBus, StoreEvent},
    models::Product,
    services::catalog_service::CatalogStore,
    storage::{KeyValueStore, MemoryStore, PRODUCTS_KEY},
};
use rust_decimal_macros::dec;

fn catalog() -> (CatalogStore<MemoryStore>, MemoryStore, EventBus) {
    let store = MemoryStore::new();
    let events = EventBus::new(16);
    (CatalogStore::new(store.clone(), events.clone()), store, events)
}

fn input(name: &str) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        category: "Snacks".to_string(),
        price: dec!(3.49),
        weight: "150g".to_string(),
        image: None,
        discount: None,
    }
}

#[tokio::test]
async fn first_load_seeds_defaults_into_storage() {
    let (catalog, store, _events) = catalog();
    assert!(store.raw(PRODUCTS_KEY).is_none());

    let first = catalog.load().await;
    assert_eq!(first, defaults::products());

    let stored: Vec<Product> = serde_json::from_str(&store.raw(PRODUCTS_KEY).unwrap()).unwrap();
    assert_eq!(stored, first);

    let second = catalog.load().await;
    assert_eq!(second, first);
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let (catalog, _store, _events) = catalog();
    let mut products = defaults::products();
    products.truncate(3);
    products[1].price = dec!(0.10);
    products[2].discount = None;

    catalog.save(products.clone()).await.unwrap();

    assert_eq!(catalog.load().await, products);
}

#[tokio::test]
async fn prices_keep_every_decimal_digit_in_storage() {
    let (catalog, store, _events) = catalog();
    let mut products = defaults::products();
    products[0].price = dec!(0.12345678901234567891);

    catalog.save(products.clone()).await.unwrap();

    let raw = store.raw(PRODUCTS_KEY).unwrap();
    assert!(raw.contains("\"price\":0.12345678901234567891"));
    let loaded = catalog.load().await;
    assert_eq!(loaded[0].price, dec!(0.12345678901234567891));
    assert_eq!(loaded, products);
}

#[tokio::test]
async fn unreadable_catalog_falls_back_to_defaults() {
    let (catalog, store, _events) = catalog();
    store
        .set(PRODUCTS_KEY, "[{\"id\": 1}]".to_string())
        .await
        .unwrap();

    assert_eq!(catalog.load().await, defaults::products());
}

#[tokio::test]
async fn save_publishes_catalog_changed() {
    let (catalog, _store, events) = catalog();
    let mut rx = events.subscribe();

    let products = defaults::products();
    catalog.save(products.clone()).await.unwrap();

    match rx.try_recv().expect("catalog event") {
        StoreEvent::CatalogChanged(snapshot) => assert_eq!(snapshot, products),
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn create_product_appends_with_generated_id() {
    let (catalog, _store, _events) = catalog();

    let created = catalog.create_product(input("Pretzels")).await.unwrap();

    assert!(created.id.starts_with("p_"));
    assert_eq!(created.discount, Some(0));
    assert_eq!(
        created.image,
        "https://picsum.photos/seed/Pretzels/400/400"
    );

    let products = catalog.load().await;
    assert_eq!(products.len(), defaults::products().len() + 1);
    assert_eq!(products.last(), Some(&created));
}

#[tokio::test]
async fn generated_ids_stay_unique_within_a_session() {
    let (catalog, _store, _events) = catalog();

    let a = catalog.create_product(input("Pretzels")).await.unwrap();
    let b = catalog.create_product(input("Popcorn")).await.unwrap();
    let c = catalog.create_product(input("Crackers")).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_ne!(b.id, c.id);
    assert_ne!(a.id, c.id);
}

#[tokio::test]
async fn update_replaces_the_whole_record() {
    let (catalog, _store, _events) = catalog();
    let mut form = input("Hass Avocado");
    form.category = "Fruits & Veg".to_string();
    form.image = Some("https://example.com/avocado.png".to_string());

    let updated = catalog.update_product("p1", form).await.unwrap();

    assert_eq!(updated.id, "p1");
    assert_eq!(updated.name, "Hass Avocado");
    assert_eq!(updated.discount, None);
    assert_eq!(catalog.get("p1").await, Some(updated));
    assert_eq!(catalog.load().await.len(), defaults::products().len());
}

#[tokio::test]
async fn update_and_delete_of_unknown_id_are_not_found() {
    let (catalog, _store, _events) = catalog();

    assert!(matches!(
        catalog.update_product("nope", input("Ghost")).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        catalog.delete_product("nope").await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn delete_removes_product() {
    let (catalog, _store, _events) = catalog();

    catalog.delete_product("p3").await.unwrap();

    let products = catalog.load().await;
    assert!(products.iter().all(|p| p.id != "p3"));
    assert_eq!(products.len(), defaults::products().len() - 1);
}

#[tokio::test]
async fn invalid_form_is_rejected_without_saving() {
    let (catalog, store, _events) = catalog();
    catalog.load().await;
    let before = store.raw(PRODUCTS_KEY);

    let no_name = input("  ");
    let mut free = input("Freebie");
    free.price = dec!(0);
    let mut no_weight = input("Loose");
    no_weight.weight = String::new();
    let mut bad_category = input("Widget");
    bad_category.category = "Gadgets".to_string();
    let mut bad_discount = input("Bargain");
    bad_discount.discount = Some(120);

    for form in [no_name, free, no_weight, bad_category, bad_discount] {
        let result = catalog.create_product(form).await;
        assert!(matches!(result, Err(AppError::Validation(_))), "{result:?}");
    }

    assert_eq!(store.raw(PRODUCTS_KEY), before);
}

#[tokio::test]
async fn replace_all_rejects_duplicate_ids() {
    let (catalog, _store, _events) = catalog();
    let mut products = defaults::products();
    products.push(products[0].clone());

    let result = catalog.replace_all(products).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(catalog.load().await, defaults::products());
}

#[tokio::test]
async fn stats_count_products_and_categories() {
    let (catalog, _store, _events) = catalog();
    catalog.delete_product("p8").await.unwrap();

    let stats = catalog.stats().await;
    assert_eq!(stats.total_products, 7);
    assert_eq!(stats.total_categories, 6);

    let recent: Vec<_> = stats.recent.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(recent, vec!["p1", "p2", "p3", "p4"]);
}

#[tokio::test]
async fn stats_on_a_short_catalog_list_every_product() {
    let (catalog, _store, _events) = catalog();
    let mut products = defaults::products();
    products.truncate(2);
    catalog.save(products.clone()).await.unwrap();

    let stats = catalog.stats().await;
    assert_eq!(stats.total_products, 2);
    assert_eq!(stats.recent, products);
}

#[tokio::test]
async fn placeholder_image_encodes_the_whole_name() {
    let (catalog, _store, _events) = catalog();

    let created = catalog
        .create_product(input("Salt & Vinegar / Sea Salt?#1"))
        .await
        .unwrap();

    assert_eq!(
        created.image,
        "https://picsum.photos/seed/Salt%20%26%20Vinegar%20%2F%20Sea%20Salt%3F%231/400/400"
    );
}

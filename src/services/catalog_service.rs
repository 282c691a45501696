use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::{
    defaults,
    dto::products::{CatalogStats, ProductInput},
    error::{AppError, AppResult},
    events::{EventBus, StoreEvent},
    models::{Category, Product},
    storage::{KeyValueStore, PRODUCTS_KEY, StorageResult},
};

/// Products listed on the admin dashboard.
pub const RECENT_PRODUCTS: usize = 4;

/// Owns the persisted product list. Every change is a full-list save.
pub struct CatalogStore<S> {
    store: S,
    events: EventBus,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> CatalogStore<S> {
    pub fn new(store: S, events: EventBus) -> Self {
        Self {
            store,
            events,
            write_lock: Mutex::new(()),
        }
    }

    /// Read the catalog, seeding the defaults on first use.
    ///
    /// Never fails: an unreadable record or a backend error falls back to the
    /// default list.
    pub async fn load(&self) -> Vec<Product> {
        let _guard = self.write_lock.lock().await;
        self.load_locked().await
    }

    async fn load_locked(&self) -> Vec<Product> {
        let raw = match self.store.get(PRODUCTS_KEY).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "catalog read failed, serving defaults");
                return defaults::products();
            }
        };

        match raw {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(products) => products,
                Err(err) => {
                    tracing::warn!(error = %err, "stored catalog unreadable, serving defaults");
                    defaults::products()
                }
            },
            None => {
                let products = defaults::products();
                match self.write(&products).await {
                    Ok(()) => tracing::info!(count = products.len(), "seeded default catalog"),
                    Err(err) => tracing::warn!(error = %err, "failed to seed default catalog"),
                }
                products
            }
        }
    }

    /// Overwrite the whole catalog and notify subscribers.
    pub async fn save(&self, products: Vec<Product>) -> AppResult<Vec<Product>> {
        let _guard = self.write_lock.lock().await;
        self.save_locked(products).await
    }

    async fn save_locked(&self, products: Vec<Product>) -> AppResult<Vec<Product>> {
        self.write(&products).await?;
        tracing::debug!(count = products.len(), "catalog saved");
        self.events.publish(StoreEvent::CatalogChanged(products.clone()));
        Ok(products)
    }

    async fn write(&self, products: &[Product]) -> StorageResult<()> {
        let raw = serde_json::to_string(products)?;
        self.store.set(PRODUCTS_KEY, raw).await
    }

    pub async fn get(&self, id: &str) -> Option<Product> {
        self.load().await.into_iter().find(|product| product.id == id)
    }

    /// Validate every record and replace the catalog with it.
    pub async fn replace_all(&self, products: Vec<Product>) -> AppResult<Vec<Product>> {
        for (index, product) in products.iter().enumerate() {
            validate_fields(
                &product.name,
                &product.category,
                product.price,
                &product.weight,
                product.discount,
            )?;
            if product.id.trim().is_empty() {
                return Err(AppError::Validation("id is required".to_string()));
            }
            if products[..index].iter().any(|other| other.id == product.id) {
                return Err(AppError::Validation(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        self.save(products).await
    }

    pub async fn create_product(&self, input: ProductInput) -> AppResult<Product> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.load_locked().await;

        let id = next_product_id(&products);
        let mut product = build_product(id, input)?;
        product.discount.get_or_insert(0);

        products.push(product.clone());
        self.save_locked(products).await?;
        tracing::info!(product_id = %product.id, "product created");
        Ok(product)
    }

    /// Replace the record with `id` wholesale.
    pub async fn update_product(&self, id: &str, input: ProductInput) -> AppResult<Product> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.load_locked().await;

        let slot = products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or(AppError::NotFound)?;
        let product = build_product(id.to_string(), input)?;
        *slot = product.clone();

        self.save_locked(products).await?;
        tracing::info!(product_id = %id, "product updated");
        Ok(product)
    }

    pub async fn delete_product(&self, id: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.load_locked().await;

        let before = products.len();
        products.retain(|product| product.id != id);
        if products.len() == before {
            return Err(AppError::NotFound);
        }

        self.save_locked(products).await?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }

    pub fn categories(&self) -> Vec<Category> {
        defaults::categories()
    }

    pub async fn stats(&self) -> CatalogStats {
        let products = self.load().await;
        CatalogStats {
            total_products: products.len(),
            total_categories: defaults::categories().len(),
            recent: products.into_iter().take(RECENT_PRODUCTS).collect(),
        }
    }
}

/// `p_<unix millis>`, bumped until it does not clash with the current list.
fn next_product_id(existing: &[Product]) -> String {
    let mut token = Utc::now().timestamp_millis();
    loop {
        let id = format!("p_{token}");
        if !existing.iter().any(|product| product.id == id) {
            return id;
        }
        token += 1;
    }
}

fn build_product(id: String, input: ProductInput) -> AppResult<Product> {
    validate_fields(
        &input.name,
        &input.category,
        input.price,
        &input.weight,
        input.discount,
    )?;

    let name = input.name.trim().to_string();
    let image = match input.image.as_deref().map(str::trim) {
        Some(image) if !image.is_empty() => image.to_string(),
        _ => defaults::placeholder_image(&name),
    };

    Ok(Product {
        id,
        name,
        category: input.category,
        price: input.price,
        weight: input.weight.trim().to_string(),
        image,
        discount: input.discount,
    })
}

fn validate_fields(
    name: &str,
    category: &str,
    price: Decimal,
    weight: &str,
    discount: Option<u8>,
) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    if weight.trim().is_empty() {
        return Err(AppError::Validation("weight is required".to_string()));
    }
    if price <= Decimal::ZERO {
        return Err(AppError::Validation(
            "price must be greater than 0".to_string(),
        ));
    }
    if discount.is_some_and(|discount| discount > 100) {
        return Err(AppError::Validation(
            "discount must be between 0 and 100".to_string(),
        ));
    }
    if !defaults::is_known_category(category) {
        return Err(AppError::Validation(format!("unknown category {category}")));
    }
    Ok(())
}

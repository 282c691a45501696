use crate::{
    dto::cart::CartSummary,
    error::{AppError, AppResult},
    events::EventBus,
    models::Product,
    services::{cart_service::CartEngine, catalog_service::CatalogStore, filter::ProductFilter},
    storage::KeyValueStore,
};

/// Single owner of storefront state. Views hold a handle to this and go
/// through the catalog and cart contracts for every change.
pub struct Storefront<S> {
    catalog: CatalogStore<S>,
    cart: CartEngine<S>,
    events: EventBus,
}

impl<S: KeyValueStore + Clone> Storefront<S> {
    pub fn new(store: S, events: EventBus) -> Self {
        Self {
            catalog: CatalogStore::new(store.clone(), events.clone()),
            cart: CartEngine::new(store, events.clone()),
            events,
        }
    }

    pub fn catalog(&self) -> &CatalogStore<S> {
        &self.catalog
    }

    pub fn cart(&self) -> &CartEngine<S> {
        &self.cart
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub async fn browse(&self, filter: &ProductFilter) -> Vec<Product> {
        filter.apply(&self.catalog.load().await)
    }

    /// Look the product up in the catalog and add one of it to the cart.
    pub async fn add_to_cart(&self, product_id: &str) -> AppResult<CartSummary> {
        let product = self
            .catalog
            .get(product_id)
            .await
            .ok_or(AppError::NotFound)?;
        let entries = self.cart.add(product).await?;
        Ok(CartSummary::from_entries(entries))
    }

    pub async fn remove_one_from_cart(&self, product_id: &str) -> AppResult<CartSummary> {
        let entries = self.cart.remove_one(product_id).await?;
        Ok(CartSummary::from_entries(entries))
    }

    pub async fn delete_from_cart(&self, product_id: &str) -> AppResult<CartSummary> {
        let entries = self.cart.delete(product_id).await?;
        Ok(CartSummary::from_entries(entries))
    }
}

use tokio::sync::Mutex;

use crate::{
    dto::cart::CartSummary,
    error::AppResult,
    events::{EventBus, StoreEvent},
    models::{CartEntry, Product},
    storage::{CART_KEY, KeyValueStore, StorageResult},
};

/// Quantity bookkeeping for the persisted cart.
///
/// Each mutator re-reads the record, applies one change, writes it back and
/// publishes the new snapshot before returning. Mutations never interleave.
pub struct CartEngine<S> {
    store: S,
    events: EventBus,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> CartEngine<S> {
    pub fn new(store: S, events: EventBus) -> Self {
        Self {
            store,
            events,
            write_lock: Mutex::new(()),
        }
    }

    /// Current cart. An unreadable record is treated as an empty cart and
    /// zero-quantity entries are dropped.
    pub async fn load(&self) -> Vec<CartEntry> {
        let mut entries: Vec<CartEntry> = match self.store.get(CART_KEY).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "stored cart unreadable, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "cart read failed, starting empty");
                Vec::new()
            }
        };

        let before = entries.len();
        entries.retain(|entry| entry.quantity > 0);
        if entries.len() < before {
            tracing::warn!(
                dropped = before - entries.len(),
                "stored cart held empty entries, ignoring them"
            );
        }
        entries
    }

    pub async fn summary(&self) -> CartSummary {
        CartSummary::from_entries(self.load().await)
    }

    pub async fn quantity_of(&self, product_id: &str) -> u32 {
        self.load()
            .await
            .iter()
            .find(|entry| entry.id() == product_id)
            .map_or(0, |entry| entry.quantity)
    }

    /// Insert with quantity 1, or bump the existing entry by one.
    pub async fn add(&self, product: Product) -> AppResult<Vec<CartEntry>> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await;

        match entries.iter_mut().find(|entry| entry.id() == product.id) {
            Some(entry) => entry.quantity += 1,
            None => entries.push(CartEntry::new(product)),
        }

        self.commit(entries).await
    }

    /// Decrement, dropping the entry instead of letting it reach zero.
    /// Unknown ids leave the cart untouched.
    pub async fn remove_one(&self, product_id: &str) -> AppResult<Vec<CartEntry>> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await;

        let Some(index) = entries.iter().position(|entry| entry.id() == product_id) else {
            return Ok(entries);
        };
        if entries[index].quantity > 1 {
            entries[index].quantity -= 1;
        } else {
            entries.remove(index);
        }

        self.commit(entries).await
    }

    /// Remove the entry whatever its quantity.
    pub async fn delete(&self, product_id: &str) -> AppResult<Vec<CartEntry>> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await;

        let before = entries.len();
        entries.retain(|entry| entry.id() != product_id);
        if entries.len() == before {
            return Ok(entries);
        }

        self.commit(entries).await
    }

    /// Drop the whole cart record.
    pub async fn clear(&self) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        self.store.delete(CART_KEY).await?;
        tracing::debug!("cart cleared");
        self.events.publish(StoreEvent::CartChanged(Vec::new()));
        Ok(())
    }

    async fn commit(&self, entries: Vec<CartEntry>) -> AppResult<Vec<CartEntry>> {
        self.write(&entries).await?;
        tracing::debug!(
            entries = entries.len(),
            items = entries.iter().map(|entry| entry.quantity).sum::<u32>(),
            "cart saved"
        );
        self.events.publish(StoreEvent::CartChanged(entries.clone()));
        Ok(entries)
    }

    async fn write(&self, entries: &[CartEntry]) -> StorageResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(CART_KEY, raw).await
    }
}

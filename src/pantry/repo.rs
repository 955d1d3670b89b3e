use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error};
use uuid::Uuid;

use crate::pantry::consumption::StockUpdate;
use crate::pantry::model::{NewPantryItem, PantryItem};
use crate::store::{DocumentStore, StoreError, PANTRY};

/// Typed access to the `pantry` collection.
#[derive(Clone)]
pub struct PantryStore {
    store: Arc<dyn DocumentStore>,
}

impl PantryStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn fetch_all(&self) -> Result<Vec<PantryItem>, StoreError> {
        let docs = self.store.fetch_all(PANTRY).await?;
        docs.into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(StoreError::from))
            .collect()
    }

    pub async fn add(&self, item: &NewPantryItem) -> Result<Uuid, StoreError> {
        self.store.insert(PANTRY, serde_json::to_value(item)?).await
    }

    pub async fn update_quantity(&self, id: Uuid, quantity: f64) -> Result<(), StoreError> {
        self.store
            .update(PANTRY, id, json!({ "quantity": quantity }))
            .await
    }

    /// Applies a staged consumption batch as independent writes, stopping at
    /// the first failure. There is no rollback: a partial failure leaves the
    /// earlier writes in place and pantry state divergent from the meal that
    /// staged them, which is logged here before the error propagates.
    pub async fn apply_updates(&self, updates: &[StockUpdate]) -> Result<(), StoreError> {
        let mut applied = 0usize;
        for update in updates {
            if let Err(e) = self
                .update_quantity(update.item_id, update.new_quantity)
                .await
            {
                error!(
                    error = %e,
                    applied,
                    staged = updates.len(),
                    item_id = %update.item_id,
                    "consumption batch failed part-way; pantry stock is stale"
                );
                return Err(e);
            }
            applied += 1;
        }
        debug!(applied, "consumption batch applied");
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.store.delete(PANTRY, id).await
    }
}

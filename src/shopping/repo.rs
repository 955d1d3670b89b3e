use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::shopping::model::{NewShoppingItem, ShoppingItem};
use crate::store::{rfc3339_now, DocumentStore, StoreError, SHOPPING};

/// Typed access to the `shopping` collection.
#[derive(Clone)]
pub struct ShoppingStore {
    store: Arc<dyn DocumentStore>,
}

impl ShoppingStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn fetch_all(&self) -> Result<Vec<ShoppingItem>, StoreError> {
        let docs = self.store.fetch_all(SHOPPING).await?;
        docs.into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(StoreError::from))
            .collect()
    }

    pub async fn add(&self, item: &NewShoppingItem) -> Result<Uuid, StoreError> {
        let mut doc = serde_json::to_value(item)?;
        doc["purchased"] = json!(false);
        self.store.insert(SHOPPING, doc).await
    }

    pub async fn mark_purchased(&self, id: Uuid, quantity: f64) -> Result<(), StoreError> {
        let patch = json!({
            "purchased": true,
            "purchasedQuantity": quantity,
            "purchasedAt": rfc3339_now()?,
        });
        self.store.update(SHOPPING, id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.store.delete(SHOPPING, id).await
    }
}

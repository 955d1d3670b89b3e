use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::meals::model::{Meal, NewMeal};
use crate::store::{rfc3339_now, DocumentStore, StoreError, MEALS};

/// Typed access to the `meals` collection.
#[derive(Clone)]
pub struct MealStore {
    store: Arc<dyn DocumentStore>,
}

impl MealStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Meal>, StoreError> {
        let docs = self.store.fetch_all(MEALS).await?;
        docs.into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(StoreError::from))
            .collect()
    }

    /// Plans a new meal. Freshly planned meals are never completed, whatever
    /// the payload claims.
    pub async fn add(&self, meal: &NewMeal) -> Result<Uuid, StoreError> {
        let mut doc = serde_json::to_value(meal)?;
        doc["completed"] = json!(false);
        self.store.insert(MEALS, doc).await
    }

    pub async fn update_meal(
        &self,
        id: Uuid,
        patch: serde_json::Value,
    ) -> Result<(), StoreError> {
        self.store.update(MEALS, id, patch).await
    }

    /// Flips the one-way `completed` flag and stamps `completedAt`.
    pub async fn mark_completed(&self, id: Uuid) -> Result<(), StoreError> {
        let patch = json!({
            "completed": true,
            "completedAt": rfc3339_now()?,
        });
        self.store.update(MEALS, id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.store.delete(MEALS, id).await
    }
}

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tokio::sync::RwLock;
use uuid::Uuid;

pub const MEALS: &str = "meals";
pub const PANTRY: &str = "pantry";
pub const SHOPPING: &str = "shopping";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document {id} not found in collection `{collection}`")]
    NotFound { collection: String, id: Uuid },
    #[error("collection `{0}` only accepts object documents")]
    InvalidDocument(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// The persistence collaborator. The engine itself never computes through it;
/// callers fetch snapshots, run the pure engine over them, and forward the
/// staged writes back here. No retry or backoff lives at this layer.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns every document in the collection, `id` injected as a field.
    /// Order is not guaranteed.
    async fn fetch_all(&self, collection: &str) -> Result<Vec<Value>, StoreError>;
    /// Inserts a new document, stamping `createdAt` and assigning the id.
    async fn insert(&self, collection: &str, data: Value) -> Result<Uuid, StoreError>;
    /// Shallow-merges `patch` into an existing document and stamps `updatedAt`.
    async fn update(&self, collection: &str, id: Uuid, patch: Value) -> Result<(), StoreError>;
    async fn delete(&self, collection: &str, id: Uuid) -> Result<(), StoreError>;
}

pub(crate) fn rfc3339_now() -> Result<String, time::error::Format> {
    OffsetDateTime::now_utc().format(&Rfc3339)
}

/// In-memory document store backing the report binary and the tests.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, HashMap<Uuid, Map<String, Value>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let guard = self.collections.read().await;
        let docs = match guard.get(collection) {
            Some(docs) => docs,
            None => return Ok(Vec::new()),
        };
        Ok(docs
            .iter()
            .map(|(id, doc)| {
                let mut merged = doc.clone();
                merged.insert("id".into(), Value::String(id.to_string()));
                Value::Object(merged)
            })
            .collect())
    }

    async fn insert(&self, collection: &str, data: Value) -> Result<Uuid, StoreError> {
        let Value::Object(mut doc) = data else {
            return Err(StoreError::InvalidDocument(collection.to_string()));
        };
        doc.insert("createdAt".into(), Value::String(rfc3339_now()?));
        let id = Uuid::new_v4();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id, doc);
        Ok(id)
    }

    async fn update(&self, collection: &str, id: Uuid, patch: Value) -> Result<(), StoreError> {
        let Value::Object(patch) = patch else {
            return Err(StoreError::InvalidDocument(collection.to_string()));
        };
        let mut guard = self.collections.write().await;
        let doc = guard
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(&id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id,
            })?;
        for (key, value) in patch {
            doc.insert(key, value);
        }
        doc.insert("updatedAt".into(), Value::String(rfc3339_now()?));
        Ok(())
    }

    async fn delete(&self, collection: &str, id: Uuid) -> Result<(), StoreError> {
        let mut guard = self.collections.write().await;
        let removed = guard
            .get_mut(collection)
            .and_then(|docs| docs.remove(&id));
        match removed {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                collection: collection.to_string(),
                id,
            }),
        }
    }
}

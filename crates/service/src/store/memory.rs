use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use tokio::sync::RwLock;

use models::RecordKind;

use super::{publish_document, RecordStore};
use crate::errors::StoreError;

/// In-memory record store used as the injected test double. Assigns
/// ObjectId-style identifiers and performs the same `_id` -> `id` rename as
/// the real backend, so handler behavior is identical.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn available(&self) -> bool {
        true
    }

    async fn create(&self, kind: RecordKind, mut document: Document) -> Result<String, StoreError> {
        let id = ObjectId::new();
        document.insert("_id", id);
        let mut collections = self.collections.write().await;
        collections
            .entry(kind.collection().to_string())
            .or_default()
            .push(document);
        Ok(id.to_hex())
    }

    async fn list(
        &self,
        kind: RecordKind,
        limit: i64,
    ) -> Result<Vec<serde_json::Value>, StoreError> {
        let collections = self.collections.read().await;
        let documents = collections.get(kind.collection()).cloned().unwrap_or_default();
        let take = usize::try_from(limit).unwrap_or(0);
        Ok(documents.into_iter().take(take).map(publish_document).collect())
    }

    async fn collection_names(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        let collections = self.collections.read().await;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        names.truncate(limit);
        Ok(names)
    }
}

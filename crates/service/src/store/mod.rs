//! Persistence gateway: one collection per record kind, create-only writes,
//! and the `_id` -> `id` rename at the serialization boundary so the backend
//! identifier never leaks in its native form.

use async_trait::async_trait;
use mongodb::bson::{self, Bson, Document};
use serde::Serialize;

use models::RecordKind;

use crate::errors::StoreError;

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Whether the backing database handle exists (degraded mode reports
    /// `false`). Cheap, never touches the network.
    fn available(&self) -> bool;

    /// Insert one document under the kind's collection and return the
    /// backend-assigned identifier as a string.
    async fn create(&self, kind: RecordKind, document: Document) -> Result<String, StoreError>;

    /// Up to `limit` documents from the kind's collection, each carrying a
    /// public string `id` field instead of the backend `_id`.
    async fn list(&self, kind: RecordKind, limit: i64)
        -> Result<Vec<serde_json::Value>, StoreError>;

    /// At most `limit` collection names, for diagnostics.
    async fn collection_names(&self, limit: usize) -> Result<Vec<String>, StoreError>;
}

/// Serialize a validated record and insert it under its kind's collection.
pub async fn insert_record<T: Serialize>(
    store: &dyn RecordStore,
    kind: RecordKind,
    record: &T,
) -> Result<String, StoreError> {
    let document = bson::to_document(record)
        .map_err(|e| StoreError::Backend(format!("encode {kind} record: {e}")))?;
    store.create(kind, document).await
}

/// Replace the backend `_id` with a public string `id` field and render the
/// document as plain JSON.
fn publish_document(mut document: Document) -> serde_json::Value {
    if let Some(id) = document.remove("_id") {
        let id = match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };
        document.insert("id", id);
    }
    Bson::Document(document).into_relaxed_extjson()
}

fn backend_error<E: std::fmt::Display>(e: E) -> StoreError {
    StoreError::Backend(e.to_string())
}

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Database};

use models::RecordKind;

use super::{backend_error, publish_document, RecordStore};
use crate::errors::StoreError;

/// Document store backed by a single process-wide MongoDB handle, created at
/// startup and reused for the process lifetime. The driver is safe for
/// concurrent use; no extra locking here.
pub struct MongoStore {
    db: Option<Database>,
}

impl MongoStore {
    /// Build the client for `url` and select `name`. The driver connects
    /// lazily, so an unreachable server still yields a handle; only a
    /// malformed URL fails here.
    pub async fn connect(url: &str, name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url).await.map_err(backend_error)?;
        Ok(Self { db: Some(client.database(name)) })
    }

    /// Degraded mode: the handle is absent and every operation fails
    /// explicitly instead of silently dropping writes.
    pub fn degraded() -> Self {
        Self { db: None }
    }

    fn database(&self) -> Result<&Database, StoreError> {
        self.db.as_ref().ok_or(StoreError::Unavailable)
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    fn available(&self) -> bool {
        self.db.is_some()
    }

    async fn create(&self, kind: RecordKind, document: Document) -> Result<String, StoreError> {
        let db = self.database()?;
        let result = db
            .collection::<Document>(kind.collection())
            .insert_one(document)
            .await
            .map_err(backend_error)?;
        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        })
    }

    async fn list(
        &self,
        kind: RecordKind,
        limit: i64,
    ) -> Result<Vec<serde_json::Value>, StoreError> {
        let db = self.database()?;
        let cursor = db
            .collection::<Document>(kind.collection())
            .find(doc! {})
            .limit(limit)
            .await
            .map_err(backend_error)?;
        let documents: Vec<Document> = cursor.try_collect().await.map_err(backend_error)?;
        Ok(documents.into_iter().map(publish_document).collect())
    }

    async fn collection_names(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        let db = self.database()?;
        let mut names = db.list_collection_names().await.map_err(backend_error)?;
        names.truncate(limit);
        Ok(names)
    }
}

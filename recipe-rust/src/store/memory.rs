use super::{decode_documents, encode_document, BookmarkStore};
use crate::{BookmarkListing, RecipeDetail, RecipeResult};
use serde_json::Value;
use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// A process-local bookmark collection with the same upsert and partial
/// read semantics as the remote store.
#[derive(Default)]
pub struct MemoryBookmarkStore {
    documents: Mutex<BTreeMap<String, Value>>,
}

impl MemoryBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn documents(&self) -> MutexGuard<'_, BTreeMap<String, Value>> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Store an arbitrary document body under `document_id`, bypassing
    /// encoding. Useful for seeding documents written by other clients.
    pub fn insert_raw(&self, document_id: impl Into<String>, body: Value) {
        self.documents().insert(document_id.into(), body);
    }

    pub fn document(&self, document_id: &str) -> Option<Value> {
        self.documents().get(document_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.documents().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents().is_empty()
    }
}

#[async_trait::async_trait]
impl BookmarkStore for MemoryBookmarkStore {
    async fn save(&self, detail: &RecipeDetail) -> RecipeResult<()> {
        let (document_id, body) = encode_document(detail)?;
        tracing::debug!(document = %document_id, "saving bookmark in memory");
        self.documents().insert(document_id, body);
        Ok(())
    }

    async fn fetch_all(&self) -> RecipeResult<BookmarkListing> {
        let documents = self.documents().clone();
        Ok(decode_documents(
            documents.into_iter().map(|(id, body)| (id, Ok(body))),
        ))
    }
}

//! Durable bookmarks, keyed by recipe name.
mod firestore;
mod firestore_value;
mod memory;

pub use firestore::{FirestoreBookmarkStore, FirestoreOptions};
pub use memory::MemoryBookmarkStore;

use crate::{BookmarkListing, RecipeDetail, RecipeError, RecipeResult, SkippedDocument, StoreError};
use serde_json::Value;

/// Name of the collection holding saved recipes.
pub const RECIPES_COLLECTION: &str = "recipes";

#[async_trait::async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Upsert `detail` under its name, replacing any stored document with
    /// the same name.
    async fn save(&self, detail: &RecipeDetail) -> RecipeResult<()>;

    /// Read every stored recipe. Documents that fail to decode are reported
    /// in [`BookmarkListing::skipped`] instead of failing the call.
    async fn fetch_all(&self) -> RecipeResult<BookmarkListing>;
}

/// The document id and JSON body `detail` is stored as.
pub(crate) fn encode_document(detail: &RecipeDetail) -> RecipeResult<(String, Value)> {
    let name = match detail.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Err(RecipeError::MissingName),
    };
    let body = serde_json::to_value(detail)
        .map_err(|error| StoreError::Encode(error.to_string()))?;
    Ok((name, body))
}

/// Decode each `(id, body)` pair independently into a listing. A body that
/// is already known to be unreadable arrives as `Err(reason)`.
pub(crate) fn decode_documents<I>(documents: I) -> BookmarkListing
where
    I: IntoIterator<Item = (String, Result<Value, String>)>,
{
    let mut listing = BookmarkListing::default();
    for (document_id, body) in documents {
        match body.and_then(|body| {
            serde_json::from_value::<RecipeDetail>(body).map_err(|error| error.to_string())
        }) {
            Ok(recipe) => listing.recipes.push(recipe),
            Err(error) => {
                tracing::warn!(
                    document = %document_id,
                    reason = %error,
                    "skipping bookmark that failed to decode"
                );
                listing.skipped.push(SkippedDocument {
                    document_id,
                    reason: error,
                });
            }
        }
    }
    listing
}

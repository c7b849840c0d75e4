use crate::{
    store::{BookmarkStore, FirestoreBookmarkStore, FirestoreOptions, MemoryBookmarkStore},
    BookmarkListing, IngredientSelection, RecipeConfig, RecipeDetail, RecipeError, RecipeResolver,
    RecipeResult, RecipeSummary,
};
use chat_sdk::{
    openai::{OpenAIChatModel, OpenAIChatModelOptions},
    LanguageModel,
};
use std::sync::Arc;

pub const SAVE_SUCCEEDED_MESSAGE: &str = "저장되었습니다.";
pub const SAVE_FAILED_MESSAGE: &str = "저장을 실패했습니다.";

/// Outcome of a bookmark save, carrying the short notice to show the user.
#[derive(Debug)]
pub struct SaveOutcome {
    pub result: RecipeResult<()>,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        self.result.is_ok()
    }

    pub fn message(&self) -> &'static str {
        if self.is_saved() {
            SAVE_SUCCEEDED_MESSAGE
        } else {
            SAVE_FAILED_MESSAGE
        }
    }

    pub fn error(&self) -> Option<&RecipeError> {
        self.result.as_ref().err()
    }
}

/// Entry point for a presentation layer: search, open, save, list.
#[derive(Clone)]
pub struct RecipeFinder {
    resolver: RecipeResolver,
    store: Arc<dyn BookmarkStore>,
}

impl RecipeFinder {
    pub fn new(model: Arc<dyn LanguageModel>, store: Arc<dyn BookmarkStore>) -> Self {
        Self {
            resolver: RecipeResolver::new(model),
            store,
        }
    }

    /// Wire the OpenAI chat model and, when a `[firestore]` section is
    /// present, the Firestore store. Without one, bookmarks stay in memory.
    pub fn from_config(config: &RecipeConfig) -> Self {
        let model = OpenAIChatModel::new(
            config.model_id(),
            OpenAIChatModelOptions {
                api_key: config.openai_key.clone(),
                base_url: config.generation.base_url.clone(),
                max_tokens: config.generation.max_tokens,
                ..Default::default()
            },
        );

        let store: Arc<dyn BookmarkStore> = match &config.firestore {
            Some(firestore) => Arc::new(FirestoreBookmarkStore::new(FirestoreOptions {
                project_id: firestore.project_id.clone(),
                database: firestore.database.clone(),
                collection: firestore.collection.clone(),
                api_key: firestore.api_key.clone(),
                access_token: firestore.access_token.clone(),
                base_url: firestore.base_url.clone(),
                client: None,
            })),
            None => {
                tracing::warn!("no firestore config, bookmarks are kept in memory");
                Arc::new(MemoryBookmarkStore::new())
            }
        };

        Self::new(Arc::new(model), store)
    }

    pub async fn search(&self, selection: &IngredientSelection) -> RecipeResult<Vec<RecipeSummary>> {
        self.resolver.resolve_candidates(selection.as_slice()).await
    }

    pub async fn open_detail(
        &self,
        summary: &RecipeSummary,
        bookmarked: Option<RecipeDetail>,
    ) -> RecipeResult<RecipeDetail> {
        self.resolver.open_detail(summary, bookmarked).await
    }

    pub async fn save(&self, detail: &RecipeDetail) -> SaveOutcome {
        let result = self.store.save(detail).await;
        if let Err(error) = &result {
            tracing::error!(error = %error, "failed to save bookmark");
        }
        SaveOutcome { result }
    }

    pub async fn bookmarks(&self) -> RecipeResult<BookmarkListing> {
        self.store.fetch_all().await
    }
}

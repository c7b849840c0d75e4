use std::{collections::VecDeque, sync::Mutex};

use crate::{
    errors::{LanguageModelError, LanguageModelResult},
    language_model::{LanguageModel, LanguageModelMetadata},
};

/// Result for a mocked `complete` call.
/// It can either be the reply text or an error to return.
pub enum MockCompleteResult {
    Text(String),
    Error(LanguageModelError),
}

impl MockCompleteResult {
    /// Construct a result that yields the provided reply text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Construct a result that yields the provided error.
    pub fn error(error: LanguageModelError) -> Self {
        Self::Error(error)
    }
}

impl From<&str> for MockCompleteResult {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for MockCompleteResult {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<LanguageModelError> for MockCompleteResult {
    fn from(error: LanguageModelError) -> Self {
        Self::Error(error)
    }
}

impl From<LanguageModelResult<String>> for MockCompleteResult {
    fn from(result: LanguageModelResult<String>) -> Self {
        match result {
            Ok(text) => Self::Text(text),
            Err(error) => Self::Error(error),
        }
    }
}

#[derive(Default)]
struct MockLanguageModelState {
    mocked_complete_results: VecDeque<MockCompleteResult>,
    tracked_prompts: Vec<String>,
}

impl MockLanguageModelState {
    fn enqueue_complete_result(&mut self, result: MockCompleteResult) {
        self.mocked_complete_results.push_back(result);
    }

    fn reset(&mut self) {
        self.tracked_prompts.clear();
    }

    fn restore(&mut self) {
        self.mocked_complete_results.clear();
        self.reset();
    }
}

/// A mock language model for testing that tracks prompts and yields
/// predefined replies in FIFO order.
pub struct MockLanguageModel {
    provider: &'static str,
    model_id: String,
    metadata: Option<LanguageModelMetadata>,
    state: Mutex<MockLanguageModelState>,
}

impl Default for MockLanguageModel {
    fn default() -> Self {
        Self {
            provider: "mock",
            model_id: "mock-model".to_string(),
            metadata: None,
            state: Mutex::new(MockLanguageModelState::default()),
        }
    }
}

impl MockLanguageModel {
    /// Construct a new mock language model instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the provider identifier returned by the mock.
    pub fn set_provider(&mut self, provider: &'static str) {
        self.provider = provider;
    }

    /// Override the model identifier returned by the mock.
    pub fn set_model_id<S: Into<String>>(&mut self, model_id: S) {
        self.model_id = model_id.into();
    }

    /// Override the metadata returned by the mock.
    pub fn set_metadata(&mut self, metadata: Option<LanguageModelMetadata>) {
        self.metadata = metadata;
    }

    /// Enqueue one or more mocked complete results.
    pub fn enqueue_complete_results<I>(&self, results: I) -> &Self
    where
        I: IntoIterator<Item = MockCompleteResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        for result in results {
            state.enqueue_complete_result(result);
        }
        drop(state);
        self
    }

    /// Convenience to enqueue a single mocked complete result.
    pub fn enqueue_complete<R>(&self, result: R) -> &Self
    where
        R: Into<MockCompleteResult>,
    {
        self.enqueue_complete_results(std::iter::once(result.into()))
    }

    /// Retrieve the prompts received so far.
    pub fn tracked_prompts(&self) -> Vec<String> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_prompts.clone()
    }

    /// Reset tracked prompts without touching enqueued results.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.reset();
    }

    /// Clear both tracked prompts and enqueued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.restore();
    }
}

#[async_trait::async_trait]
impl LanguageModel for MockLanguageModel {
    fn provider(&self) -> &'static str {
        self.provider
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    fn metadata(&self) -> Option<&LanguageModelMetadata> {
        self.metadata.as_ref()
    }

    async fn complete(&self, prompt: &str) -> LanguageModelResult<String> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_prompts.push(prompt.to_string());

        let result = state.mocked_complete_results.pop_front().ok_or_else(|| {
            LanguageModelError::Parse(self.provider, "no mocked complete results available".into())
        })?;

        match result {
            MockCompleteResult::Text(text) => Ok(text),
            MockCompleteResult::Error(error) => Err(error),
        }
    }
}

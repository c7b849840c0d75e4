use crate::LanguageModelResult;

/// Static settings of a model as exposed to callers and tracing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageModelMetadata {
    /// Ceiling sent as `max_tokens` with every completion.
    pub max_tokens: Option<u32>,
}

/// A text model that answers one prompt with one reply.
///
/// Callers embed any formatting instructions (expected JSON shape,
/// language, cardinality) directly in the prompt: the endpoint does not
/// enforce a schema.
#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync {
    fn provider(&self) -> &'static str;
    fn model_id(&self) -> String;
    fn metadata(&self) -> Option<&LanguageModelMetadata> {
        None
    }
    /// Send `prompt` as a single user message and return the raw text of
    /// the first completion.
    async fn complete(&self, prompt: &str) -> LanguageModelResult<String>;
}

use super::chat_api::{
    ChatCompletionRequestMessage, CompletionUsage, CreateChatCompletionRequest,
    CreateChatCompletionResponse,
};
use crate::{
    client_utils, LanguageModel, LanguageModelError, LanguageModelMetadata, LanguageModelResult,
};
use reqwest::{
    header::{self, HeaderMap, HeaderName, HeaderValue},
    Client,
};
use std::collections::HashMap;

const PROVIDER: &str = "openai";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MAX_TOKENS: u32 = 500;

pub struct OpenAIChatModel {
    model_id: String,
    api_key: String,
    base_url: String,
    client: Client,
    metadata: LanguageModelMetadata,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct OpenAIChatModelOptions {
    pub base_url: Option<String>,
    pub api_key: String,
    /// Defaults to [`DEFAULT_MAX_TOKENS`].
    pub max_tokens: Option<u32>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl OpenAIChatModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: OpenAIChatModelOptions) -> Self {
        let OpenAIChatModelOptions {
            base_url,
            api_key,
            max_tokens,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let headers = headers.unwrap_or_default();

        Self {
            model_id: model_id.into(),
            api_key,
            base_url,
            client,
            metadata: LanguageModelMetadata {
                max_tokens: Some(max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)),
            },
            headers,
        }
    }

    fn request_headers(&self) -> LanguageModelResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        let auth_header =
            HeaderValue::from_str(&format!("Bearer {}", self.api_key)).map_err(|error| {
                LanguageModelError::InvalidInput(format!(
                    "Invalid OpenAI API key header value: {error}"
                ))
            })?;
        headers.insert(header::AUTHORIZATION, auth_header);
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                LanguageModelError::InvalidInput(format!(
                    "Invalid OpenAI header name '{key}': {error}"
                ))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                LanguageModelError::InvalidInput(format!(
                    "Invalid OpenAI header value for '{key}': {error}"
                ))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    async fn send_completion(
        &self,
        prompt: &str,
    ) -> LanguageModelResult<(String, Option<CompletionUsage>)> {
        let request = CreateChatCompletionRequest {
            model: self.model_id.clone(),
            messages: vec![ChatCompletionRequestMessage::user(prompt)],
            max_tokens: self.metadata.max_tokens,
        };
        let headers = self.request_headers()?;

        let response: CreateChatCompletionResponse = client_utils::send_json(
            &self.client,
            &format!("{}/chat/completions", self.base_url),
            &request,
            headers,
            PROVIDER,
        )
        .await?;

        let usage = response.usage;
        let content = extract_first_content(response)?;

        tracing::debug!(
            model = %self.model_id,
            reply_chars = content.chars().count(),
            "received chat completion"
        );

        Ok((content, usage))
    }
}

#[async_trait::async_trait]
impl LanguageModel for OpenAIChatModel {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    fn metadata(&self) -> Option<&LanguageModelMetadata> {
        Some(&self.metadata)
    }

    async fn complete(&self, prompt: &str) -> LanguageModelResult<String> {
        if prompt.trim().is_empty() {
            return Err(LanguageModelError::InvalidInput(
                "prompt must not be empty".to_string(),
            ));
        }

        crate::opentelemetry::trace_complete(
            self.provider(),
            &self.model_id,
            self.metadata.max_tokens,
            prompt,
            || self.send_completion(prompt),
        )
        .await
    }
}

/// Pull `choices[0].message.content` out of a completion envelope.
fn extract_first_content(response: CreateChatCompletionResponse) -> LanguageModelResult<String> {
    let choice = response.choices.into_iter().next().ok_or_else(|| {
        LanguageModelError::Parse(PROVIDER, "No choices in response".to_string())
    })?;

    let message = choice.message.ok_or_else(|| {
        LanguageModelError::Parse(PROVIDER, "First choice has no message".to_string())
    })?;

    message.content.ok_or_else(|| {
        LanguageModelError::Parse(
            PROVIDER,
            "First choice message has no text content".to_string(),
        )
    })
}

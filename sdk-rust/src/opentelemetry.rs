use crate::{openai::chat_api::CompletionUsage, LanguageModelResult};
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct CompletionSpan {
    span: Span,
    usage: Option<CompletionUsage>,
    start_time: Instant,
    max_tokens: Option<u32>,
    prompt_chars: usize,
}

impl CompletionSpan {
    pub fn new(provider: &str, model_id: &str, max_tokens: Option<u32>, prompt: &str) -> Self {
        let span = info_span!("chat_sdk.complete");
        span.set_attribute("gen_ai.operation.name", "chat");
        span.set_attribute("gen_ai.provider.name", provider.to_string());
        span.set_attribute("gen_ai.request.model", model_id.to_string());

        Self {
            span,
            usage: None,
            start_time: Instant::now(),
            max_tokens,
            prompt_chars: prompt.chars().count(),
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    pub fn on_usage(&mut self, usage: Option<CompletionUsage>) {
        if usage.is_some() {
            self.usage = usage;
        }
    }

    pub fn on_error(&mut self, error: &(dyn std::error::Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        if let Some(usage) = &self.usage {
            self.span
                .set_attribute("gen_ai.usage.input_tokens", i64::from(usage.prompt_tokens));
            self.span.set_attribute(
                "gen_ai.usage.output_tokens",
                i64::from(usage.completion_tokens),
            );
        }

        if let Some(max_tokens) = self.max_tokens {
            self.span
                .set_attribute("gen_ai.request.max_tokens", i64::from(max_tokens));
        }

        self.span.set_attribute(
            "chat_sdk.prompt_chars",
            i64::try_from(self.prompt_chars).unwrap_or(i64::MAX),
        );
        self.span
            .set_attribute("chat_sdk.duration_seconds", self.elapsed_seconds());
    }

    fn elapsed_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

/// Run one completion inside a `chat_sdk.complete` span.
///
/// The closure returns the reply text together with the token usage
/// reported by the endpoint, if any.
pub async fn trace_complete<F, Fut>(
    provider: &str,
    model_id: &str,
    max_tokens: Option<u32>,
    prompt: &str,
    f: F,
) -> LanguageModelResult<String>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = LanguageModelResult<(String, Option<CompletionUsage>)>>,
{
    let mut span = CompletionSpan::new(provider, model_id, max_tokens, prompt);
    let result = span.instrument_future(f()).await;

    let result = match result {
        Ok((content, usage)) => {
            span.on_usage(usage);
            Ok(content)
        }
        Err(error) => {
            span.on_error(&error);
            Err(error)
        }
    };

    span.on_end();
    result
}

pub(crate) mod chat_api;
mod chat_model;

pub use chat_model::{
    OpenAIChatModel, OpenAIChatModelOptions, DEFAULT_MAX_TOKENS, DEFAULT_OPENAI_BASE_URL,
};

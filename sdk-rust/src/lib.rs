pub mod chat_sdk_test;
mod client_utils;
mod errors;
mod language_model;
pub mod openai;
mod opentelemetry;

pub use errors::*;
pub use language_model::{LanguageModel, LanguageModelMetadata};

//! Test doubles for code that depends on a [`crate::LanguageModel`].
mod model;

pub use model::{MockCompleteResult, MockLanguageModel};

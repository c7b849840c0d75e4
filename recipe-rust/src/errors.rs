use chat_sdk::LanguageModelError;
use thiserror::Error;

/// Coarse classification of a [`RecipeError`] for presentation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    /// The network request could not be completed.
    Transport,
    /// The generation endpoint answered with a non-OK status.
    Server,
    /// A response did not match the expected envelope or recipe shape.
    Parse,
    MissingName,
    Store,
}

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Generation error: {0}")]
    Generation(#[from] LanguageModelError),
    #[error("Failed to parse recipe list: {0}")]
    RecipeListParse(String),
    #[error("Failed to parse recipe detail: {0}")]
    RecipeDetailParse(String),
    #[error("Recipe name is missing.")]
    MissingName,
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl RecipeError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_)
            | Self::Generation(LanguageModelError::InvalidInput(_)) => ErrorKind::InvalidInput,
            Self::Generation(LanguageModelError::Transport(_)) => ErrorKind::Transport,
            Self::Generation(LanguageModelError::Server(..)) => ErrorKind::Server,
            Self::Generation(LanguageModelError::Parse(..))
            | Self::RecipeListParse(_)
            | Self::RecipeDetailParse(_) => ErrorKind::Parse,
            Self::MissingName => ErrorKind::MissingName,
            Self::Store(StoreError::Transport(_)) => ErrorKind::Transport,
            Self::Store(_) => ErrorKind::Store,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The document store answered with a non-success status.
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    #[error("Failed to encode document: {0}")]
    Encode(String),
    /// A response from the store itself (not a stored document) was malformed.
    #[error("Unexpected response from {0}: {1}")]
    Invariant(&'static str, String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(String, #[source] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config key `{0}` is missing or empty")]
    MissingKey(&'static str),
}

pub type RecipeResult<T> = Result<T, RecipeError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LanguageModelError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request could not be sent or its body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with anything other than `200 OK`.
    #[error("Server error: {1} (Status {0})")]
    Server(reqwest::StatusCode, String),
    /// The response envelope did not have the expected shape
    /// (e.g. no `choices[0].message.content` in a chat completion).
    #[error("Parse error from {0}: {1}")]
    Parse(&'static str, String),
}

impl LanguageModelError {
    /// Whether the failure happened before a response was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

pub type LanguageModelResult<T> = Result<T, LanguageModelError>;

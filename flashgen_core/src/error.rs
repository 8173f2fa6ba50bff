//! Error taxonomy for the generation pipeline.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlashcardError>;

#[derive(Debug, Error)]
pub enum FlashcardError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Response format error: {0}")]
    GenerationFormat(String),

    #[error("No valid flashcards generated")]
    NoValidCards,

    #[error("Generation failed: {0}")]
    GenerationFailed(#[from] ProviderError),
}

impl FlashcardError {
    /// True for errors caused by the caller's input rather than the system.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Why the raw text was rejected before generation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Text input cannot be empty")]
    Empty,

    #[error("Text must be at least 10 characters long")]
    TooShort { actual: usize },

    #[error("Text input too long (max 10,000 characters)")]
    TooLong { actual: usize },
}

/// Failures reported by a completion provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("request timed out")]
    Timeout,

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Transient failures worth another attempt: network trouble, throttling, server errors.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Request(_) | Self::Timeout => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::InvalidResponse(_) => false,
        }
    }
}

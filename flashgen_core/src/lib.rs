#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod card;
pub mod error;
pub mod generator;
pub mod preparer;
pub mod service;
pub mod util;

pub use card::{Flashcard, FlashcardSet, MAX_CARDS_PER_SET};
pub use error::{FlashcardError, InvalidInput, ProviderError};
pub use generator::{CardGenerator, GenerationConfig};
pub use preparer::{CardCountHint, PreparedText, prepare};
pub use service::FlashcardService;

/// A single completion call: one system instruction, one user prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Ask the provider for a JSON object instead of free text.
    pub json_output: bool,
}

#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Submit a prompt, receive text. Everything provider specific lives behind this.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: &CompletionRequest)
    -> Result<CompletionResponse, ProviderError>;

    fn name(&self) -> &str;
}

#[async_trait]
impl<T> CompletionProvider for Arc<T>
where
    T: CompletionProvider + ?Sized,
{
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        (**self).complete(request).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

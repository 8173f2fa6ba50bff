use flashgen_core::{Flashcard, FlashcardSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct FlashcardResponse {
    pub flashcards: Vec<Flashcard>,
    pub total_count: usize,
}

impl From<FlashcardSet> for FlashcardResponse {
    fn from(set: FlashcardSet) -> Self {
        let flashcards = set.into_inner();
        Self {
            total_count: flashcards.len(),
            flashcards,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub openai_configured: bool,
}

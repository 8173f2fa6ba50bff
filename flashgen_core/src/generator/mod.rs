//! Card generation: prompt the provider, parse its answer, validate the cards.

mod parse;
mod prompt;
mod validate;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::card::Flashcard;
use crate::error::Result;
use crate::preparer::CardCountHint;
use crate::{CompletionProvider, CompletionRequest};

pub use parse::{CardsPayload, parse_cards};
pub use prompt::{SYSTEM_PROMPT, build_prompt};
pub use validate::{
    MAX_ANSWER_CHARS, MAX_QUESTION_CHARS, MIN_ANSWER_CHARS, MIN_QUESTION_CHARS, validate_cards,
};

/// Sampling parameters for generation requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationConfig {
    #[serde(default = "GenerationConfig::default_temperature")]
    pub temperature: f32,
    #[serde(default = "GenerationConfig::default_max_tokens")]
    pub max_tokens: u32,
}

impl GenerationConfig {
    const fn default_temperature() -> f32 {
        0.7
    }

    const fn default_max_tokens() -> u32 {
        1500
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: Self::default_temperature(),
            max_tokens: Self::default_max_tokens(),
        }
    }
}

pub struct CardGenerator<P = Arc<dyn CompletionProvider>>
where
    P: CompletionProvider,
{
    provider: P,
    config: GenerationConfig,
}

impl<P> CardGenerator<P>
where
    P: CompletionProvider,
{
    pub const fn new(provider: P, config: GenerationConfig) -> Self {
        Self { provider, config }
    }

    #[must_use]
    pub fn request_for(&self, text: &str, hint: CardCountHint) -> CompletionRequest {
        CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            prompt: build_prompt(text, hint),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            json_output: true,
        }
    }

    /// Ask the provider for `hint` cards about `text`.
    ///
    /// The result is validated and deduplicated but not truncated; the provider may return
    /// more or fewer cards than requested.
    pub async fn generate(&self, text: &str, hint: CardCountHint) -> Result<Vec<Flashcard>> {
        let request = self.request_for(text, hint);

        info!(
            "Requesting {} flashcards from {}: text_chars={}",
            hint,
            self.provider.name(),
            text.chars().count()
        );

        let response = self.provider.complete(&request).await?;

        info!(
            "Completion received: {} characters",
            response.content.chars().count()
        );
        if let Some(usage) = response.usage {
            debug!(
                "Token usage: prompt={}, completion={}, total={}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        let candidates = parse_cards(&response.content)?;
        let parsed = candidates.len();
        let cards = validate_cards(candidates);

        info!("Parsed {} flashcards, {} after validation", parsed, cards.len());
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::error::FlashcardError;
    use crate::{CompletionResponse, ProviderError};

    /// Replies with a fixed body and records the last request.
    struct CannedProvider {
        reply: std::result::Result<String, u16>,
        last_request: Mutex<Option<CompletionRequest>>,
    }

    impl CannedProvider {
        fn ok(body: impl Into<String>) -> Self {
            Self {
                reply: Ok(body.into()),
                last_request: Mutex::new(None),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                last_request: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl CompletionProvider for CannedProvider {
        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> std::result::Result<CompletionResponse, ProviderError> {
            *self.last_request.lock().unwrap() = Some(request.clone());
            match &self.reply {
                Ok(body) => Ok(CompletionResponse {
                    content: body.clone(),
                    usage: None,
                }),
                Err(status) => Err(ProviderError::Status {
                    status: *status,
                    body: "upstream exploded".to_string(),
                }),
            }
        }

        fn name(&self) -> &'static str {
            "canned"
        }
    }

    fn hint() -> CardCountHint {
        CardCountHint::from_word_count(10)
    }

    #[tokio::test]
    async fn request_carries_generation_settings() {
        let provider = CannedProvider::ok(
            json!({"flashcards": [{"question": "What is a lifetime?", "answer": "A scope for references."}]})
                .to_string(),
        );
        let generator = CardGenerator::new(provider, GenerationConfig::default());

        generator
            .generate("Lifetimes describe how long references are valid.", hint())
            .await
            .unwrap();

        let request = generator.provider.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.system, SYSTEM_PROMPT);
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(request.max_tokens, 1500);
        assert!(request.json_output);
        assert!(request.prompt.contains("Create exactly 3 educational flashcards"));
        assert!(request.prompt.contains("Lifetimes describe how long references are valid."));
    }

    #[tokio::test]
    async fn returns_all_well_formed_cards_in_order() {
        let questions: Vec<String> = (1..=6).map(|i| format!("What is concept number {i}?")).collect();
        let body = json!({
            "flashcards": questions
                .iter()
                .map(|q| json!({"question": q, "answer": "An important idea."}))
                .collect::<Vec<_>>()
        });
        let generator =
            CardGenerator::new(CannedProvider::ok(body.to_string()), GenerationConfig::default());

        let cards = generator.generate("text", hint()).await.unwrap();

        let returned: Vec<&str> = cards.iter().map(Flashcard::question).collect();
        assert_eq!(returned, questions);
    }

    #[tokio::test]
    async fn duplicate_questions_are_collapsed() {
        let body = json!([
            {"question": "What is borrowing?", "answer": "Taking a reference."},
            {"question": "WHAT IS BORROWING?", "answer": "Something else."}
        ]);
        let generator =
            CardGenerator::new(CannedProvider::ok(body.to_string()), GenerationConfig::default());

        let cards = generator.generate("text", hint()).await.unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].answer(), "Taking a reference.");
    }

    #[tokio::test]
    async fn short_lone_card_is_kept() {
        let body = json!([{"question": "Why", "answer": "Because of ownership."}]);
        let generator =
            CardGenerator::new(CannedProvider::ok(body.to_string()), GenerationConfig::default());

        let cards = generator.generate("text", hint()).await.unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question(), "Why");
    }

    #[tokio::test]
    async fn non_json_reply_is_format_error() {
        let generator = CardGenerator::new(
            CannedProvider::ok("Sure! Here are some flashcards:"),
            GenerationConfig::default(),
        );

        let err = generator.generate("text", hint()).await.unwrap_err();
        assert!(matches!(err, FlashcardError::GenerationFormat(_)));
    }

    #[tokio::test]
    async fn empty_array_has_no_valid_cards() {
        let generator = CardGenerator::new(CannedProvider::ok("[]"), GenerationConfig::default());

        let err = generator.generate("text", hint()).await.unwrap_err();
        assert!(matches!(err, FlashcardError::NoValidCards));
    }

    #[tokio::test]
    async fn provider_failure_is_generation_failed() {
        let generator = CardGenerator::new(CannedProvider::failing(502), GenerationConfig::default());

        let err = generator.generate("text", hint()).await.unwrap_err();
        assert!(matches!(
            err,
            FlashcardError::GenerationFailed(ProviderError::Status { status: 502, .. })
        ));
    }

    #[tokio::test]
    async fn works_behind_dyn_provider() {
        let provider: Arc<dyn CompletionProvider> = Arc::new(CannedProvider::ok(
            r#"[{"question": "What is a trait object?", "answer": "Dynamic dispatch."}]"#,
        ));
        let generator: CardGenerator = CardGenerator::new(provider, GenerationConfig::default());

        let cards = generator.generate("text", hint()).await.unwrap();
        assert_eq!(cards.len(), 1);
    }
}

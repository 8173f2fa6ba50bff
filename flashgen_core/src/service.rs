//! Caller-facing entry point: raw text in, bounded flashcard set out.

use std::sync::Arc;

use tracing::{error, info};

use crate::card::FlashcardSet;
use crate::error::Result;
use crate::generator::{CardGenerator, GenerationConfig};
use crate::preparer::prepare;
use crate::CompletionProvider;
use crate::util::preview;

pub struct FlashcardService<P = Arc<dyn CompletionProvider>>
where
    P: CompletionProvider,
{
    generator: CardGenerator<P>,
}

impl<P> FlashcardService<P>
where
    P: CompletionProvider,
{
    pub const fn new(provider: P, config: GenerationConfig) -> Self {
        Self {
            generator: CardGenerator::new(provider, config),
        }
    }

    /// Prepare `raw`, generate cards for it and enforce the set bounds.
    pub async fn generate_flashcards(&self, raw: &str) -> Result<FlashcardSet> {
        let input_len = raw.chars().count();
        let result = self.run(raw, input_len).await;

        match &result {
            Ok(set) => info!("Generated {} flashcards", set.len()),
            Err(e) => error!(
                "Flashcard generation failed: input_len={}, preview={:?}, error={}",
                input_len,
                preview(raw),
                e
            ),
        }
        result
    }

    async fn run(&self, raw: &str, input_len: usize) -> Result<FlashcardSet> {
        let prepared = prepare(raw)?;
        info!(
            "Prepared text: input_len={}, normalized_len={}, words={}, hint={}",
            input_len,
            prepared.text.chars().count(),
            prepared.word_count,
            prepared.hint
        );

        let cards = self
            .generator
            .generate(&prepared.text, prepared.hint)
            .await?;
        FlashcardSet::from_cards(cards)
    }
}

//! One-shot generation from the command line.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use flashgen_config::Config;
use flashgen_core::{FlashcardError, FlashcardSet};

use super::build_service;

/// Input parameters for the Generate command strategy.
#[derive(Debug, Clone)]
pub struct GenerateInput {
    /// Inline text
    pub text: Option<String>,
    /// File to read the text from
    pub file: Option<PathBuf>,
    /// Emit JSON instead of numbered text
    pub json: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct GenerateStrategy;

impl super::CommandStrategy for GenerateStrategy {
    type Input = GenerateInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let service = build_service(&config)?.ok_or_else(|| {
            FlashcardError::Configuration(
                "OpenAI API key not configured. Set OPENAI_API_KEY or run 'flashgen init'."
                    .to_string(),
            )
        })?;

        let text = read_text(input.text, input.file)?;
        let set = service.generate_flashcards(&text).await?;

        if input.json {
            println!("{}", render_json(&set)?);
        } else {
            print!("{}", render_text(&set));
        }
        Ok(())
    }
}

fn read_text(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer)
}

fn render_json(set: &FlashcardSet) -> anyhow::Result<String> {
    let body = serde_json::json!({
        "flashcards": set,
        "total_count": set.len(),
    });
    Ok(serde_json::to_string_pretty(&body)?)
}

fn render_text(set: &FlashcardSet) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for (i, card) in set.iter().enumerate() {
        let _ = writeln!(out, "{}. Q: {}", i + 1, card.question());
        let _ = writeln!(out, "   A: {}", card.answer());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashgen_core::Flashcard;

    fn sample() -> FlashcardSet {
        FlashcardSet::from_cards(vec![
            Flashcard::new("What is a closure?", "A function capturing its environment.")
                .unwrap(),
            Flashcard::new("What is an iterator?", "A lazy sequence of values.").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn text_output_numbers_cards() {
        let rendered = render_text(&sample());
        assert!(rendered.starts_with("1. Q: What is a closure?\n   A: A function"));
        assert!(rendered.contains("2. Q: What is an iterator?"));
    }

    #[test]
    fn json_output_matches_api_shape() {
        let rendered: serde_json::Value =
            serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();
        assert_eq!(rendered["total_count"], 2);
        assert_eq!(rendered["flashcards"][1]["answer"], "A lazy sequence of values.");
    }

    #[test]
    fn inline_text_wins() {
        let text = read_text(Some("inline".to_string()), None).unwrap();
        assert_eq!(text, "inline");
    }
}

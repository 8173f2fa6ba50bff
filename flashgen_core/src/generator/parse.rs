//! Decoding provider output into candidate cards.

use serde::Deserialize;
use serde_json::Value;

use crate::card::Flashcard;
use crate::error::{FlashcardError, Result};

/// The two top-level shapes a provider may answer with.
#[derive(Debug, PartialEq)]
pub enum CardsPayload {
    /// `{"flashcards": [...]}`
    Wrapped(Vec<Value>),
    /// `[...]`
    Bare(Vec<Value>),
}

impl CardsPayload {
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(mut map) => match map.remove("flashcards") {
                Some(Value::Array(items)) => Ok(Self::Wrapped(items)),
                Some(other) => Err(FlashcardError::GenerationFormat(format!(
                    "`flashcards` must be an array, got {}",
                    json_type(&other)
                ))),
                None => Err(FlashcardError::GenerationFormat(
                    "object has no `flashcards` key".to_string(),
                )),
            },
            Value::Array(items) => Ok(Self::Bare(items)),
            other => Err(FlashcardError::GenerationFormat(format!(
                "unexpected top-level {}",
                json_type(&other)
            ))),
        }
    }

    #[must_use]
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Self::Wrapped(items) | Self::Bare(items) => items,
        }
    }
}

#[derive(Deserialize)]
struct RawCard {
    question: String,
    answer: String,
}

/// Parse a completion body into trimmed cards, in provider order.
///
/// Elements that are not objects with string `question` and `answer` fields are skipped.
pub fn parse_cards(content: &str) -> Result<Vec<Flashcard>> {
    let value: Value = serde_json::from_str(content).map_err(|e| {
        FlashcardError::GenerationFormat(format!("response is not valid JSON: {e}"))
    })?;

    let items = CardsPayload::from_value(value)?.into_items();
    let total = items.len();

    let cards: Vec<Flashcard> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<RawCard>(item).ok())
        .filter_map(|raw| Flashcard::new(&raw.question, &raw.answer))
        .collect();

    if cards.is_empty() {
        return Err(FlashcardError::NoValidCards);
    }

    tracing::debug!(
        "Extracted {} of {} candidate flashcards",
        cards.len(),
        total
    );
    Ok(cards)
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Flashcard types.
//!
//! A [`Flashcard`] is an immutable question/answer pair. A [`FlashcardSet`] is the ordered,
//! deduplicated and bounded collection handed back to callers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{FlashcardError, Result};

/// Upper bound on the number of cards returned to a caller.
pub const MAX_CARDS_PER_SET: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    question: String,
    answer: String,
}

impl Flashcard {
    /// Build a card from untrimmed text. Returns `None` if either side is blank.
    #[must_use]
    pub fn new(question: &str, answer: &str) -> Option<Self> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Self {
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Key used for case-insensitive duplicate detection.
    #[must_use]
    pub fn question_key(&self) -> String {
        self.question.to_lowercase()
    }
}

/// Ordered cards, unique by case-insensitive question, 1..=15 long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlashcardSet(Vec<Flashcard>);

impl FlashcardSet {
    /// Enforce the set invariants on generator output.
    ///
    /// Later duplicates are dropped and anything past [`MAX_CARDS_PER_SET`] is truncated.
    /// An empty input is an error.
    pub fn from_cards(cards: Vec<Flashcard>) -> Result<Self> {
        let mut seen = HashSet::new();
        let unique: Vec<Flashcard> = cards
            .into_iter()
            .filter(|card| seen.insert(card.question_key()))
            .take(MAX_CARDS_PER_SET)
            .collect();

        if unique.is_empty() {
            return Err(FlashcardError::NoValidCards);
        }
        Ok(Self(unique))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed set; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flashcard> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Flashcard> {
        self.0
    }
}

impl<'a> IntoIterator for &'a FlashcardSet {
    type Item = &'a Flashcard;
    type IntoIter = std::slice::Iter<'a, Flashcard>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::card::Flashcard;

pub const MIN_QUESTION_CHARS: usize = 10;
pub const MAX_QUESTION_CHARS: usize = 500;
pub const MIN_ANSWER_CHARS: usize = 5;
pub const MAX_ANSWER_CHARS: usize = 1000;

/// Question and answer lengths in characters, the unit every bound is expressed in.
fn char_lengths(card: &Flashcard) -> (usize, usize) {
    (
        card.question().chars().count(),
        card.answer().chars().count(),
    )
}

fn within_bounds((question, answer): (usize, usize)) -> bool {
    (MIN_QUESTION_CHARS..=MAX_QUESTION_CHARS).contains(&question)
        && (MIN_ANSWER_CHARS..=MAX_ANSWER_CHARS).contains(&answer)
}

/// Filter out undersized, oversized and duplicate cards, keeping provider order.
///
/// If nothing survives, the first candidate is returned on its own so a response that
/// produced any parseable card never comes back empty.
#[must_use]
pub fn validate_cards(candidates: Vec<Flashcard>) -> Vec<Flashcard> {
    let fallback = candidates.first().cloned();
    let mut seen = HashSet::new();
    let mut accepted = Vec::with_capacity(candidates.len());

    for card in candidates {
        let (question_chars, answer_chars) = char_lengths(&card);
        if !within_bounds((question_chars, answer_chars)) {
            debug!(
                "Dropping flashcard outside length bounds: question_chars={}, answer_chars={}",
                question_chars, answer_chars
            );
            continue;
        }
        if !seen.insert(card.question_key()) {
            debug!("Dropping duplicate question: {}", card.question());
            continue;
        }
        accepted.push(card);
    }

    if accepted.is_empty() {
        if let Some(first) = fallback {
            warn!("No flashcard passed validation, keeping the first candidate");
            accepted.push(first);
        }
    }

    accepted
}

//! Text preparation: length checks, normalization and the card-count heuristic.

use std::fmt;

use crate::error::InvalidInput;

/// Minimum accepted input length, in characters, after whitespace is collapsed.
pub const MIN_TEXT_CHARS: usize = 10;
/// Maximum accepted input length, in characters, after whitespace is collapsed.
pub const MAX_TEXT_CHARS: usize = 10_000;
/// Lines this short or shorter are treated as artifacts (headers, page numbers).
const ARTIFACT_LINE_CHARS: usize = 10;

/// Number of cards requested from the provider. Always one of 3, 5, 7, 9 or 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardCountHint(u8);

impl CardCountHint {
    #[must_use]
    pub const fn from_word_count(words: usize) -> Self {
        let count = match words {
            0..100 => 3,
            100..300 => 5,
            300..600 => 7,
            600..1000 => 9,
            _ => 12,
        };
        Self(count)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CardCountHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Output of [`prepare`]: normalized text plus the parameters derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedText {
    pub text: String,
    pub word_count: usize,
    pub hint: CardCountHint,
}

/// Validate and normalize raw input, then derive the card-count hint.
///
/// Length bounds apply to the input with every whitespace run collapsed to one space.
/// Artifact lines are only dropped after the input has been accepted.
pub fn prepare(raw: &str) -> Result<PreparedText, InvalidInput> {
    let length = collapse_whitespace(raw).chars().count();

    if length == 0 {
        return Err(InvalidInput::Empty);
    }
    if length < MIN_TEXT_CHARS {
        return Err(InvalidInput::TooShort { actual: length });
    }
    if length > MAX_TEXT_CHARS {
        return Err(InvalidInput::TooLong { actual: length });
    }

    let text = normalize(raw);
    let word_count = word_count(&text);

    Ok(PreparedText {
        text,
        word_count,
        hint: CardCountHint::from_word_count(word_count),
    })
}

/// Drop artifact lines, then collapse every whitespace run to a single space.
///
/// When every line is an artifact the whole text is kept, so short single-line input
/// survives normalization. The result never contains a newline, which makes the function
/// idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    let meaningful: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > ARTIFACT_LINE_CHARS)
        .collect();

    let lines = if meaningful.is_empty() {
        vec![text]
    } else {
        meaningful
    };

    collapse_whitespace(&lines.join("\n"))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

use crate::preparer::CardCountHint;

/// System instruction sent with every generation request.
pub const SYSTEM_PROMPT: &str = "You are an expert educational content creator. Generate high-quality flashcards that test comprehension, analysis, and key concepts. Always respond with valid JSON only.";

/// Build the user prompt asking for exactly `hint` cards about `text`.
#[must_use]
pub fn build_prompt(text: &str, hint: CardCountHint) -> String {
    format!(
        r#"Create exactly {hint} educational flashcards based on the following text.

Requirements:
- Focus on key concepts, definitions, and important facts
- Questions should test understanding, not just memorization
- Include a mix of question types (what, how, why, when, where)
- Keep questions clear and concise (under 100 words)
- Provide complete, accurate answers (under 200 words)
- Only use information that appears in the text
- Make questions challenging but fair

Text to analyze:
{text}

Respond with a JSON object in this exact format:
{{
  "flashcards": [
    {{"question": "Clear, specific question here?", "answer": "Complete, accurate answer here."}},
    {{"question": "Another question?", "answer": "Another answer."}}
  ]
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_count_and_text() {
        let hint = CardCountHint::from_word_count(350);
        let prompt = build_prompt("Rust guarantees memory safety without a GC.", hint);

        assert!(prompt.starts_with("Create exactly 7 educational flashcards"));
        assert!(prompt.contains("Rust guarantees memory safety without a GC."));
        assert!(prompt.contains("under 100 words"));
        assert!(prompt.contains("under 200 words"));
        assert!(prompt.contains(r#""flashcards": ["#));
    }

    #[test]
    fn system_prompt_demands_json() {
        assert!(SYSTEM_PROMPT.ends_with("Always respond with valid JSON only."));
    }
}

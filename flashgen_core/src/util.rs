//! Helpers for logging user text and secrets safely.

const MAX_PREVIEW_CHARS: usize = 80;

/// Short single-line excerpt of user text for log lines.
#[must_use]
pub fn preview(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = collapsed.chars().count();
    if total <= MAX_PREVIEW_CHARS {
        return collapsed;
    }

    let head: String = collapsed.chars().take(MAX_PREVIEW_CHARS).collect();
    format!("{head}... ({total} chars total)")
}

/// Mask an API key for display, keeping only its first and last four characters.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_collapses_whitespace() {
        assert_eq!(preview("  a\n\nb   c "), "a b c");
        assert_eq!(preview(" \n "), "[EMPTY]");
    }

    #[test]
    fn preview_clips_long_text() {
        let text = "x".repeat(200);
        let clipped = preview(&text);
        assert!(clipped.starts_with(&"x".repeat(MAX_PREVIEW_CHARS)));
        assert!(clipped.ends_with("(200 chars total)"));
    }

    #[test]
    fn mask_secret_hides_middle() {
        assert_eq!(mask_secret("sk-abcdefghijkl"), "sk-a...ijkl");
        assert_eq!(mask_secret("short"), "***");
    }
}

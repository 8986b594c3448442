use std::sync::LazyLock;

use regex::Regex;

const MAX_VISIBLE_CHARS: usize = 100;

static HEX_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:0x)?[0-9a-fA-F]{64}\b").expect("valid key pattern")
});

/// Shortens transcript text for logs and masks anything shaped like a
/// private key. Truncation counts characters, not bytes.
pub fn sanitize_transcript(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = HEX_KEY.replace_all(trimmed, "[REDACTED]");
    let total = redacted.chars().count();

    if total > MAX_VISIBLE_CHARS {
        let visible: String = redacted.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total)
    } else {
        redacted.into_owned()
    }
}

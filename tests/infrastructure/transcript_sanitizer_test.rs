use zapbase::infrastructure::observability::sanitize_transcript;

#[test]
fn given_blank_text_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_transcript("   "), "[EMPTY]");
}

#[test]
fn given_short_text_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_transcript(" send 1 eth to bob "), "send 1 eth to bob");
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_with_total() {
    let text = "a".repeat(150);

    let result = sanitize_transcript(&text);

    assert!(result.starts_with(&"a".repeat(100)));
    assert!(result.ends_with("... (150 chars total)"));
}

#[test]
fn given_multibyte_text_when_truncating_then_does_not_split_characters() {
    let text = "é".repeat(120);

    let result = sanitize_transcript(&text);

    assert!(result.starts_with(&"é".repeat(100)));
    assert!(result.ends_with("(120 chars total)"));
}

#[test]
fn given_private_key_in_text_when_sanitizing_then_it_is_redacted() {
    let key = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    let text = format!("my key is 0x{} please send", key);

    let result = sanitize_transcript(&text);

    assert!(!result.contains(key));
    assert!(result.contains("[REDACTED]"));
}

use docsum::infrastructure::observability::preview_text;

#[test]
fn given_empty_text_when_previewing_then_marks_empty() {
    assert_eq!(preview_text("  \n "), "[EMPTY]");
}

#[test]
fn given_multiline_text_when_previewing_then_flattens_whitespace() {
    assert_eq!(preview_text("INVOICE #123\nTotal"), "INVOICE #123 Total");
}

#[test]
fn given_long_text_when_previewing_then_truncates_with_total() {
    let text = "a".repeat(250);

    let preview = preview_text(&text);

    assert!(preview.starts_with(&"a".repeat(100)));
    assert!(preview.ends_with("... (250 chars total)"));
}

#[test]
fn given_credentials_in_text_when_previewing_then_redacts_every_occurrence() {
    let preview = preview_text("token=abc123 and later token=def456");

    assert!(!preview.contains("abc123"));
    assert!(!preview.contains("def456"));
    assert_eq!(preview.matches("token=[REDACTED]").count(), 2);
}

#[test]
fn given_multibyte_text_when_truncating_then_keeps_char_boundaries() {
    let text = "é".repeat(150);

    let preview = preview_text(&text);

    assert!(preview.contains("(150 chars total)"));
}

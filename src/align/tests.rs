use super::*;

#[test]
fn finds_tokens_in_order() {
    let text = "What color is the sky";
    let mut cursor = Cursor::new();

    assert_eq!(cursor.find(text, "What").unwrap(), Span { start: 0, end: 4 });
    assert_eq!(cursor.find(text, "color").unwrap(), Span { start: 5, end: 10 });
    assert_eq!(cursor.find(text, "is").unwrap(), Span { start: 11, end: 13 });
    assert_eq!(cursor.position(), 13);
}

#[test]
fn repeated_tokens_resolve_to_successive_occurrences() {
    let text = "the sky the sea";
    let mut cursor = Cursor::new();

    assert_eq!(cursor.find(text, "the").unwrap(), Span { start: 0, end: 3 });
    assert_eq!(cursor.find(text, "the").unwrap(), Span { start: 8, end: 11 });
}

#[test]
fn rescanning_from_same_start_is_deterministic() {
    let text = "grass is green";

    let mut first = Cursor::at(6);
    let mut second = Cursor::at(6);
    assert_eq!(first.find(text, "is"), second.find(text, "is"));
    assert_eq!(first, second);
}

#[test]
fn missing_token_names_token_and_position() {
    let text = "grass is green";
    let mut cursor = Cursor::at(6);

    let err = cursor.find(text, "grass").unwrap_err();
    assert_eq!(
        err,
        AlignmentError::TokenNotFound {
            token: "grass".to_string(),
            position: 6,
        }
    );
    // A failed find never advances the cursor.
    assert_eq!(cursor.position(), 6);
}

#[test]
fn cursor_past_end_fails_rather_than_panics() {
    let mut cursor = Cursor::at(100);
    assert!(cursor.find("short", "s").is_err());
}

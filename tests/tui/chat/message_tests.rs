//! Message layout tests

use simplechat_cli::tui::screens::chat::{bubble_lines, wrap_text};
use simplechat_core::types::Message;

#[test]
fn test_wrap_short_text() {
    assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
}

#[test]
fn test_wrap_at_word_boundary() {
    assert_eq!(
        wrap_text("the quick brown fox", 10),
        vec!["the quick", "brown fox"]
    );
}

#[test]
fn test_wrap_splits_long_words() {
    assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
}

#[test]
fn test_wrap_keeps_newlines() {
    assert_eq!(wrap_text("one\ntwo", 20), vec!["one", "two"]);
}

#[test]
fn test_wrap_counts_characters() {
    assert_eq!(wrap_text("ééé ééé", 3), vec!["ééé", "ééé"]);
}

#[test]
fn test_wrap_uses_display_width_for_wide_glyphs() {
    assert_eq!(wrap_text("你好世界", 4), vec!["你好", "世界"]);
    assert_eq!(wrap_text("你好 世界", 5), vec!["你好", "世界"]);
}

#[test]
fn test_bubble_has_label_text_and_time() {
    let msg = Message::user("Hi there");
    let lines = bubble_lines(&msg, 40);

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].to_string(), "You");
    assert_eq!(lines[1].to_string(), " Hi there ");
    assert_eq!(lines[2].to_string().len(), 5);
}

#[test]
fn test_bot_bubble_label() {
    let lines = bubble_lines(&Message::error(), 80);
    assert_eq!(lines[0].to_string(), "Assistant");
}

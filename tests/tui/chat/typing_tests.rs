//! Typing indicator tests

use simplechat_cli::tui::screens::chat::{TYPING_INTERVAL, TypingIndicator};
use std::time::{Duration, Instant};

#[test]
fn test_inactive_by_default() {
    let mut typing = TypingIndicator::default();
    assert!(!typing.is_active());
    assert!(!typing.tick(Instant::now() + TYPING_INTERVAL));
    assert_eq!(typing.label(), "Typing");
}

#[test]
fn test_advances_once_per_interval() {
    let start = Instant::now();
    let mut typing = TypingIndicator::default();
    typing.start(start);

    assert!(!typing.tick(start + Duration::from_millis(399)));
    assert_eq!(typing.dots(), 0);

    assert!(typing.tick(start + TYPING_INTERVAL));
    assert_eq!(typing.dots(), 1);
    assert_eq!(typing.label(), "Typing.");
}

#[test]
fn test_dots_wrap_after_three() {
    let start = Instant::now();
    let mut typing = TypingIndicator::default();
    typing.start(start);

    let labels: Vec<String> = (1..=4)
        .map(|step| {
            typing.tick(start + TYPING_INTERVAL * step);
            typing.label()
        })
        .collect();

    assert_eq!(labels, ["Typing.", "Typing..", "Typing...", "Typing"]);
}

#[test]
fn test_stop_resets() {
    let start = Instant::now();
    let mut typing = TypingIndicator::default();
    typing.start(start);
    typing.tick(start + TYPING_INTERVAL);

    typing.stop();
    assert!(!typing.is_active());
    assert_eq!(typing.dots(), 0);
}

//! ChatState tests

use super::offline_state;
use simplechat_core::constants::{ERROR_TEXT, RESET_TEXT, WELCOME_TEXT};
use simplechat_core::controller::SubmitOutcome;
use simplechat_core::resolver::{Reply, ReplySource, ResolveError};
use simplechat_core::validation::LengthStatus;
use std::time::Instant;

#[test]
fn test_chat_state_new() {
    let state = offline_state();

    assert_eq!(state.messages().len(), 1);
    assert_eq!(state.messages()[0].text, WELCOME_TEXT);
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
    assert_eq!(state.scroll_offset, u16::MAX);
    assert!(!state.is_pending());
    assert!(!state.confirm_reset);
    assert!(!state.typing.is_active());
}

#[test]
fn test_submit_clears_input_and_starts_typing() {
    let mut state = offline_state();
    state.input = "  Hello  ".to_string();
    state.cursor_pos = 9;

    let pending = state.submit_input(Instant::now()).expect("accepted");

    assert_eq!(pending.prompt, "Hello");
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
    assert!(state.is_pending());
    assert!(state.typing.is_active());
    assert_eq!(state.messages().len(), 2);
    assert_eq!(state.messages()[1].text, "Hello");
}

#[test]
fn test_rejected_submit_keeps_input() {
    let mut state = offline_state();
    state.input = "x".repeat(1001);

    assert!(state.submit_input(Instant::now()).is_none());
    assert_eq!(state.input.chars().count(), 1001);
    assert_eq!(state.messages().len(), 1);
    assert!(!state.is_pending());
}

#[test]
fn test_apply_reply_stops_typing() {
    let mut state = offline_state();
    state.input = "Hi".to_string();
    state.submit_input(Instant::now()).expect("accepted");

    let outcome = state.apply_reply(Ok(Reply::fallback("Echo: Hi")));

    assert_eq!(outcome, SubmitOutcome::Replied(ReplySource::Fallback));
    assert!(!state.is_pending());
    assert!(!state.typing.is_active());
    assert_eq!(state.messages()[2].text, "Echo: Hi");
    // Offline from the start, so no "offline reply" notice
    assert!(state.status_message.is_none());
}

#[test]
fn test_fallback_reply_flagged_when_remote_configured() {
    let mut state = offline_state();
    state.info.remote = true;
    state.input = "Hi".to_string();
    state.submit_input(Instant::now()).expect("accepted");

    state.apply_reply(Ok(Reply::fallback("Echo: Hi")));

    assert_eq!(state.status_message.as_deref(), Some("offline reply"));
}

#[test]
fn test_failed_reply_adds_error_bubble() {
    let mut state = offline_state();
    state.input = "Hi".to_string();
    state.submit_input(Instant::now()).expect("accepted");

    let outcome = state.apply_reply(Err(ResolveError::Simulated));

    assert_eq!(outcome, SubmitOutcome::Failed);
    let last = state.messages().last().expect("message");
    assert!(last.is_error);
    assert_eq!(last.text, ERROR_TEXT);
}

#[test]
fn test_reset_requires_confirmation() {
    let mut state = offline_state();
    state.input = "Hi".to_string();
    state.submit_input(Instant::now()).expect("accepted");
    state.apply_reply(Ok(Reply::remote("Hello")));

    state.request_reset();
    assert!(state.confirm_reset);
    state.cancel_reset();
    assert!(!state.confirm_reset);
    assert_eq!(state.messages().len(), 3);

    state.request_reset();
    state.confirm_reset();
    assert!(!state.confirm_reset);
    assert_eq!(state.messages().len(), 1);
    assert_eq!(state.messages()[0].text, RESET_TEXT);
}

#[test]
fn test_gauge_tracks_input_length() {
    let mut state = offline_state();
    assert_eq!(state.gauge().counter_label(), "");
    assert_eq!(state.gauge().status, LengthStatus::Normal);

    state.input = "a".repeat(800);
    assert_eq!(state.gauge().status, LengthStatus::NearLimit);
    assert_eq!(state.gauge().counter_label(), "800 / 1000");
    assert!(state.can_submit());

    state.input = "a".repeat(1001);
    assert_eq!(state.gauge().status, LengthStatus::OverLimit);
    assert!(state.gauge().is_over_limit());
    assert!(!state.can_submit());
}

#[test]
fn test_can_submit_rejects_blank_and_pending() {
    let mut state = offline_state();
    state.input = "   ".to_string();
    assert!(!state.can_submit());

    state.input = "Hi".to_string();
    state.submit_input(Instant::now()).expect("accepted");
    state.input = "again".to_string();
    assert!(!state.can_submit());
}

#[test]
fn test_insert_and_delete_multibyte() {
    let mut state = offline_state();
    for c in "héllo".chars() {
        state.insert_char(c);
    }
    assert_eq!(state.cursor_pos, 5);

    state.move_cursor_left();
    state.move_cursor_left();
    state.move_cursor_left();
    state.delete_char();
    assert_eq!(state.input, "hllo");
    assert_eq!(state.cursor_pos, 1);

    state.insert_char('é');
    assert_eq!(state.input, "héllo");

    state.move_cursor_home();
    state.delete_char_forward();
    assert_eq!(state.input, "éllo");

    state.move_cursor_end();
    assert_eq!(state.cursor_pos, 4);
    state.move_cursor_right();
    assert_eq!(state.cursor_pos, 4);
}

#[test]
fn test_take_input() {
    let mut state = offline_state();
    state.input = "/clear".to_string();
    state.cursor_pos = 6;

    assert_eq!(state.take_input(), "/clear");
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

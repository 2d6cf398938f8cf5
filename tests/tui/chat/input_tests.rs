//! Key handling tests

use super::offline_state;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use simplechat_cli::tui::screens::chat::{InputAction, handle_input};
use std::time::Instant;

fn make_key(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

fn make_key_with_ctrl(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

#[test]
fn test_typing_updates_input() {
    let mut state = offline_state();
    for c in "hi".chars() {
        assert_eq!(handle_input(&mut state, make_key(KeyCode::Char(c))), InputAction::None);
    }
    assert_eq!(state.input, "hi");

    handle_input(&mut state, make_key(KeyCode::Backspace));
    assert_eq!(state.input, "h");
}

#[test]
fn test_release_events_are_ignored() {
    let mut state = offline_state();
    let release = Event::Key(KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });
    assert_eq!(handle_input(&mut state, release), InputAction::None);
    assert!(state.input.is_empty());
}

#[test]
fn test_enter_submits_valid_input() {
    let mut state = offline_state();
    state.input = "Hello".to_string();
    assert_eq!(handle_input(&mut state, make_key(KeyCode::Enter)), InputAction::Submit);
}

#[test]
fn test_enter_ignores_blank_or_long_input() {
    let mut state = offline_state();
    state.input = "   ".to_string();
    assert_eq!(handle_input(&mut state, make_key(KeyCode::Enter)), InputAction::None);

    state.input = "a".repeat(1001);
    assert_eq!(handle_input(&mut state, make_key(KeyCode::Enter)), InputAction::None);
}

#[test]
fn test_enter_on_command_takes_input() {
    let mut state = offline_state();
    state.input = "/clear".to_string();
    assert_eq!(
        handle_input(&mut state, make_key(KeyCode::Enter)),
        InputAction::Command("/clear".to_string())
    );
    assert!(state.input.is_empty());
}

#[test]
fn test_message_may_start_with_q() {
    let mut state = offline_state();
    for c in "quick".chars() {
        assert_eq!(handle_input(&mut state, make_key(KeyCode::Char(c))), InputAction::None);
    }
    assert_eq!(state.input, "quick");
    assert_eq!(handle_input(&mut state, make_key(KeyCode::Enter)), InputAction::Submit);
}

#[test]
fn test_unknown_slash_text_is_submitted() {
    let mut state = offline_state();
    state.input = "/usr/bin is where binaries live".to_string();
    state.cursor_pos = state.input.chars().count();

    assert_eq!(handle_input(&mut state, make_key(KeyCode::Enter)), InputAction::Submit);
    assert_eq!(state.input, "/usr/bin is where binaries live");
}

#[test]
fn test_ctrl_keys() {
    let mut state = offline_state();
    state.input = "draft".to_string();
    state.cursor_pos = 5;

    assert_eq!(
        handle_input(&mut state, make_key_with_ctrl(KeyCode::Char('c'))),
        InputAction::None
    );
    assert!(state.input.is_empty());

    assert_eq!(
        handle_input(&mut state, make_key_with_ctrl(KeyCode::Char('l'))),
        InputAction::RequestReset
    );
    assert_eq!(
        handle_input(&mut state, make_key_with_ctrl(KeyCode::Char('q'))),
        InputAction::Exit
    );
}

#[test]
fn test_confirm_dialog_keys() {
    let mut state = offline_state();
    state.request_reset();

    assert_eq!(handle_input(&mut state, make_key(KeyCode::Char('y'))), InputAction::ConfirmReset);
    assert_eq!(handle_input(&mut state, make_key(KeyCode::Enter)), InputAction::ConfirmReset);
    assert_eq!(handle_input(&mut state, make_key(KeyCode::Char('n'))), InputAction::CancelReset);
    assert_eq!(handle_input(&mut state, make_key(KeyCode::Esc)), InputAction::CancelReset);
    assert_eq!(handle_input(&mut state, make_key(KeyCode::Char('x'))), InputAction::None);
    assert!(state.input.is_empty());
}

#[test]
fn test_input_disabled_while_pending() {
    let mut state = offline_state();
    state.input = "Hello".to_string();
    state.submit_input(Instant::now()).expect("accepted");

    assert_eq!(handle_input(&mut state, make_key(KeyCode::Char('a'))), InputAction::None);
    assert!(state.input.is_empty());
    assert_eq!(handle_input(&mut state, make_key(KeyCode::Enter)), InputAction::None);
    assert_eq!(
        handle_input(&mut state, make_key_with_ctrl(KeyCode::Char('l'))),
        InputAction::None
    );
    assert_eq!(handle_input(&mut state, make_key(KeyCode::PageUp)), InputAction::ScrollUp);
    assert_eq!(handle_input(&mut state, make_key(KeyCode::Char('q'))), InputAction::None);
    assert_eq!(
        handle_input(&mut state, make_key_with_ctrl(KeyCode::Char('q'))),
        InputAction::Exit
    );
}

#[test]
fn test_scroll_keys() {
    let mut state = offline_state();
    assert_eq!(handle_input(&mut state, make_key(KeyCode::Up)), InputAction::ScrollUp);
    assert_eq!(handle_input(&mut state, make_key(KeyCode::PageDown)), InputAction::ScrollDown);
    assert_eq!(
        handle_input(&mut state, make_key_with_ctrl(KeyCode::Char('u'))),
        InputAction::ScrollTop
    );
    assert_eq!(
        handle_input(&mut state, make_key_with_ctrl(KeyCode::Char('d'))),
        InputAction::ScrollBottom
    );
}

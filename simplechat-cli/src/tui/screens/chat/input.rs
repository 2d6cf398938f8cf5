//! Chat input handling

use super::state::ChatState;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Submit the current input
    Submit,
    /// Exit the chat
    Exit,
    /// Execute a slash command
    Command(String),
    /// Open the clear-history confirmation
    RequestReset,
    ConfirmReset,
    CancelReset,
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
}

/// Handle a terminal event and update state
pub fn handle_input(state: &mut ChatState, event: Event) -> InputAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if state.confirm_reset {
                handle_confirm_key(key)
            } else {
                handle_key(state, key)
            }
        }
        _ => InputAction::None,
    }
}

fn handle_confirm_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => InputAction::ConfirmReset,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => InputAction::CancelReset,
        _ => InputAction::None,
    }
}

fn handle_key(state: &mut ChatState, key: KeyEvent) -> InputAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('q') {
        return InputAction::Exit;
    }

    match key.code {
        KeyCode::Up | KeyCode::PageUp => return InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => return InputAction::ScrollDown,
        KeyCode::Char('u') if ctrl => return InputAction::ScrollTop,
        KeyCode::Char('d') if ctrl => return InputAction::ScrollBottom,
        _ => {}
    }

    // Input is disabled while a reply is pending
    if state.is_pending() {
        return InputAction::None;
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('c') => {
                state.clear_input();
                InputAction::None
            }
            KeyCode::Char('l') => InputAction::RequestReset,
            _ => InputAction::None,
        };
    }

    match key.code {
        KeyCode::Enter => {
            if state.is_command() {
                return InputAction::Command(state.take_input());
            }
            if state.can_submit() {
                InputAction::Submit
            } else {
                InputAction::None
            }
        }
        KeyCode::Esc => {
            state.clear_input();
            InputAction::None
        }
        KeyCode::Backspace => {
            state.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            state.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputAction::None
        }
        KeyCode::Char(c) => {
            state.insert_char(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    None,
    ShowHelp,
    Clear,
    Exit,
    Unknown(String),
}

/// Parse a slash command. Text whose first word is not a known command
/// comes back as `Unknown` and is sent as an ordinary message.
pub fn parse_command(input: &str) -> CommandResult {
    let cmd = input.trim().trim_start_matches('/');
    let name = cmd
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match name.as_str() {
        "" => CommandResult::None,
        "help" | "?" => CommandResult::ShowHelp,
        "clear" | "reset" | "new" => CommandResult::Clear,
        "exit" | "quit" | "bye" => CommandResult::Exit,
        _ => CommandResult::Unknown(name),
    }
}

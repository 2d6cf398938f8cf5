//! Command detection and parsing tests

use super::offline_state;
use simplechat_cli::tui::screens::chat::{CommandResult, parse_command};

#[test]
fn test_is_command_with_slash() {
    let mut state = offline_state();
    state.input = "/help".to_string();
    assert!(state.is_command());
}

#[test]
fn test_unknown_slash_text_is_not_command() {
    let mut state = offline_state();
    state.input = "/usr/bin is where binaries live".to_string();
    assert!(!state.is_command());
}

#[test]
fn test_is_not_command() {
    let mut state = offline_state();
    state.input = "Hello there".to_string();
    assert!(!state.is_command());
}

#[test]
fn test_parse_help() {
    assert_eq!(parse_command("/help"), CommandResult::ShowHelp);
    assert_eq!(parse_command("/?"), CommandResult::ShowHelp);
}

#[test]
fn test_parse_clear_aliases() {
    assert_eq!(parse_command("/clear"), CommandResult::Clear);
    assert_eq!(parse_command("/reset"), CommandResult::Clear);
    assert_eq!(parse_command("/NEW"), CommandResult::Clear);
}

#[test]
fn test_parse_exit_aliases() {
    assert_eq!(parse_command("/exit"), CommandResult::Exit);
    assert_eq!(parse_command("/quit"), CommandResult::Exit);
    assert_eq!(parse_command(" /bye "), CommandResult::Exit);
}

#[test]
fn test_parse_empty_and_unknown() {
    assert_eq!(parse_command("/"), CommandResult::None);
    assert_eq!(
        parse_command("/agent on"),
        CommandResult::Unknown("agent".to_string())
    );
}

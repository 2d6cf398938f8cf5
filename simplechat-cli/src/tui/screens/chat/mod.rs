//! TUI Chat interface module
//!
//! - state.rs: chat screen state around the conversation controller
//! - typing.rs: "Typing..." animation
//! - input.rs: key handling and slash commands
//! - ui.rs: rendering
//! - runner.rs: event loop

mod input;
mod runner;
mod state;
mod typing;
mod ui;

pub use input::{CommandResult, InputAction, handle_input, parse_command};
pub use runner::run_chat;
pub use state::{ChatInfo, ChatState};
pub use typing::{TYPING_INTERVAL, TypingIndicator};
pub use ui::{ChatUI, bubble_lines, wrap_text};

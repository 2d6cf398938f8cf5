//! TUI unit tests module
//!
//! - chat/: ChatState, input, command, scroll, typing and message layout tests

pub mod chat;

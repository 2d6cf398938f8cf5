//! TUI module for the terminal chat interface using Ratatui

pub mod screens;
mod terminal;
pub mod theme;

pub use terminal::{TerminalSession, Tui, restore_terminal};

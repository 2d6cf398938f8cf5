//! Chat screen state management

use super::input::{CommandResult, parse_command};
use super::typing::TypingIndicator;
use simplechat_core::controller::{ConversationController, PendingReply, SubmitOutcome};
use simplechat_core::resolver::{Reply, ReplySource, ResolveError};
use simplechat_core::types::Message;
use simplechat_core::validation::{self, InputGauge};
use std::cell::Cell;
use std::time::Instant;

/// Static facts shown in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatInfo {
    pub model: String,
    /// Whether a remote client was configured at startup
    pub remote: bool,
}

/// Chat screen state
pub struct ChatState {
    controller: ConversationController,
    pub info: ChatInfo,
    /// Current input buffer
    pub input: String,
    /// Cursor position in input, in characters
    pub cursor_pos: usize,
    /// Scroll offset for messages; `u16::MAX` pins to the bottom
    pub scroll_offset: u16,
    /// Largest useful scroll offset, recorded by the last render
    pub max_scroll: Cell<u16>,
    pub typing: TypingIndicator,
    /// Clear-history confirmation dialog is open
    pub confirm_reset: bool,
    pub status_message: Option<String>,
}

impl ChatState {
    pub fn new(controller: ConversationController, info: ChatInfo) -> Self {
        Self {
            controller,
            info,
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: u16::MAX,
            max_scroll: Cell::new(0),
            typing: TypingIndicator::default(),
            confirm_reset: false,
            status_message: None,
        }
    }

    pub fn controller(&self) -> &ConversationController {
        &self.controller
    }

    pub fn messages(&self) -> &[Message] {
        self.controller.messages()
    }

    pub fn is_pending(&self) -> bool {
        self.controller.is_pending()
    }

    pub fn gauge(&self) -> InputGauge {
        InputGauge::measure(&self.input, self.controller.limits())
    }

    pub fn can_submit(&self) -> bool {
        validation::can_submit(&self.input, self.is_pending(), self.controller.limits())
    }

    /// Hand the input to the controller; the buffer is cleared only when accepted.
    pub fn submit_input(&mut self, now: Instant) -> Option<PendingReply> {
        let pending = self.controller.begin(&self.input).ok()?;
        self.input.clear();
        self.cursor_pos = 0;
        self.status_message = None;
        self.typing.start(now);
        self.scroll_to_bottom();
        Some(pending)
    }

    /// Apply a finished reply
    pub fn apply_reply(&mut self, result: Result<Reply, ResolveError>) -> SubmitOutcome {
        let outcome = self.controller.complete(result);
        self.typing.stop();
        if self.info.remote && outcome == SubmitOutcome::Replied(ReplySource::Fallback) {
            self.status_message = Some("offline reply".into());
        }
        self.scroll_to_bottom();
        outcome
    }

    pub fn request_reset(&mut self) {
        self.confirm_reset = true;
    }

    pub fn cancel_reset(&mut self) {
        self.confirm_reset = false;
    }

    pub fn confirm_reset(&mut self) {
        self.confirm_reset = false;
        self.controller.reset();
        self.status_message = None;
        self.scroll_to_bottom();
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn input_chars(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor_pos);
        self.input.insert(idx, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            let idx = self.byte_index(self.cursor_pos - 1);
            self.input.remove(idx);
            self.cursor_pos -= 1;
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.input_chars() {
            let idx = self.byte_index(self.cursor_pos);
            self.input.remove(idx);
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    /// Get the current input and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.input_chars() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input_chars();
    }

    /// Scroll messages up; a bottom pin is resolved against the last render
    pub fn scroll_up(&mut self) {
        let current = self.scroll_offset.min(self.max_scroll.get());
        self.scroll_offset = current.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max_scroll = self.max_scroll.get();
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
        if self.scroll_offset >= max_scroll {
            self.scroll_to_bottom();
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to bottom of messages
    pub fn scroll_to_bottom(&mut self) {
        // Resolved against the content height during render
        self.scroll_offset = u16::MAX;
    }

    /// Input names a known slash command; other `/...` text is a message
    pub fn is_command(&self) -> bool {
        self.input.starts_with('/')
            && !matches!(parse_command(&self.input), CommandResult::Unknown(_))
    }
}

//! Conversation session state

use crate::domain::Message;

/// Ordered message list plus the "awaiting response" flag.
///
/// Starts with the welcome greeting; only ever appended to or reset.
#[derive(Debug, Clone)]
pub struct Session {
    messages: Vec<Message>,
    pending: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::welcome()],
            pending: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub(crate) fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Replace the history with a single fresh greeting. Leaves `pending` alone.
    pub(crate) fn reset(&mut self) {
        self.messages = vec![Message::reset_greeting()];
    }
}

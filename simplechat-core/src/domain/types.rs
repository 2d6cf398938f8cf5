use crate::constants::{ERROR_TEXT, RESET_TEXT, WELCOME_MESSAGE_ID, WELCOME_TEXT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl Message {
    fn new(id: String, sender: Sender, text: impl Into<String>, is_error: bool) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: Utc::now(),
            is_error,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), Sender::User, text, false)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), Sender::Bot, text, false)
    }

    /// Bot message flagged as an error bubble, carrying the fixed apology.
    pub fn error() -> Self {
        Self::new(Uuid::new_v4().to_string(), Sender::Bot, ERROR_TEXT, true)
    }

    pub fn welcome() -> Self {
        Self::new(WELCOME_MESSAGE_ID.to_string(), Sender::Bot, WELCOME_TEXT, false)
    }

    pub fn reset_greeting() -> Self {
        Self::new(
            format!("reset-msg-{}", Uuid::new_v4()),
            Sender::Bot,
            RESET_TEXT,
            false,
        )
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

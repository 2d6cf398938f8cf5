//! Submission gate and input length gauge

use crate::config::InputLimits;
use thiserror::Error;

/// Why a submission was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("a reply is still pending")]
    Pending,
    #[error("message is empty")]
    Empty,
    #[error("message is {length} characters, limit is {max}")]
    TooLong { length: usize, max: usize },
}

/// Length in characters, the unit of every limit
pub fn char_length(text: &str) -> usize {
    text.chars().count()
}

/// Decide whether `text` may be submitted. The untrimmed length is checked.
pub fn check_submission(text: &str, pending: bool, limits: &InputLimits) -> Result<(), Rejection> {
    if pending {
        return Err(Rejection::Pending);
    }
    if text.trim().is_empty() {
        return Err(Rejection::Empty);
    }
    let length = char_length(text);
    if length > limits.max_length {
        return Err(Rejection::TooLong {
            length,
            max: limits.max_length,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthStatus {
    Normal,
    NearLimit,
    OverLimit,
}

impl LengthStatus {
    pub fn classify(length: usize, limits: &InputLimits) -> Self {
        if length > limits.max_length {
            LengthStatus::OverLimit
        } else if length >= limits.warning_threshold {
            LengthStatus::NearLimit
        } else {
            LengthStatus::Normal
        }
    }
}

/// Live character counter shown next to the input box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputGauge {
    pub length: usize,
    pub max: usize,
    pub status: LengthStatus,
}

impl InputGauge {
    pub fn measure(text: &str, limits: &InputLimits) -> Self {
        let length = char_length(text);
        Self {
            length,
            max: limits.max_length,
            status: LengthStatus::classify(length, limits),
        }
    }

    /// `"<n> / <max>"`, or nothing for an empty input
    pub fn counter_label(&self) -> String {
        if self.length == 0 {
            String::new()
        } else {
            format!("{} / {}", self.length, self.max)
        }
    }

    pub fn is_over_limit(&self) -> bool {
        self.status == LengthStatus::OverLimit
    }
}

/// Whether the send affordance should be enabled
pub fn can_submit(text: &str, pending: bool, limits: &InputLimits) -> bool {
    check_submission(text, pending, limits).is_ok()
}

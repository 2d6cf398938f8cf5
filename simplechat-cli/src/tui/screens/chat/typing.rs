//! "Typing..." animation shown while a reply is pending

use std::time::{Duration, Instant};

/// Time between two dot steps
pub const TYPING_INTERVAL: Duration = Duration::from_millis(400);

/// Animated "Typing" label shown while a reply is pending
#[derive(Debug, Clone, Default)]
pub struct TypingIndicator {
    dots: usize,
    last_step: Option<Instant>,
}

impl TypingIndicator {
    pub fn start(&mut self, now: Instant) {
        self.dots = 0;
        self.last_step = Some(now);
    }

    pub fn stop(&mut self) {
        self.dots = 0;
        self.last_step = None;
    }

    pub fn is_active(&self) -> bool {
        self.last_step.is_some()
    }

    pub fn dots(&self) -> usize {
        self.dots
    }

    /// Advance one dot per elapsed interval, wrapping after three.
    /// Returns true when the label changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_step else {
            return false;
        };
        if now.saturating_duration_since(last) < TYPING_INTERVAL {
            return false;
        }
        self.dots = if self.dots < 3 { self.dots + 1 } else { 0 };
        self.last_step = Some(now);
        true
    }

    pub fn label(&self) -> String {
        format!("Typing{}", ".".repeat(self.dots))
    }
}

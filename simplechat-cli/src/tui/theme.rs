//! TUI Theme
//!
//! Blue for the user side, white/gray for the assistant, red for errors,
//! orange once the input nears its length limit.

use ratatui::style::{Color, Modifier, Style};
use simplechat_core::validation::LengthStatus;

/// Primary accent - user bubbles and active borders
pub const ACCENT: Color = Color::Rgb(37, 99, 235);

/// Warning - counter near the limit
pub const WARNING: Color = Color::Rgb(249, 115, 22);

/// Online indicator
pub const SUCCESS: Color = Color::Rgb(34, 197, 94);

/// Error bubbles and over-limit counter
pub const ERROR: Color = Color::Rgb(220, 38, 38);

/// Muted text - timestamps, placeholders
pub const MUTED: Color = Color::Rgb(156, 163, 175);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

pub fn title() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn avatar() -> Style {
    Style::default()
        .fg(ACCENT)
        .bg(Color::Rgb(219, 234, 254))
        .add_modifier(Modifier::BOLD)
}

pub fn online() -> Style {
    Style::default().fg(SUCCESS)
}

pub fn typing() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::ITALIC)
}

pub fn subtitle() -> Style {
    Style::default().fg(MUTED)
}

pub fn separator() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
}

pub fn user_bubble() -> Style {
    Style::default().fg(Color::White).bg(ACCENT)
}

pub fn bot_bubble() -> Style {
    Style::default().fg(Color::White)
}

pub fn error_bubble() -> Style {
    Style::default().fg(ERROR)
}

pub fn sender_label() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
}

pub fn timestamp() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn placeholder() -> Style {
    Style::default().fg(MUTED)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

pub fn border_error() -> Style {
    Style::default().fg(ERROR)
}

/// Character counter colour per length state
pub fn counter(status: LengthStatus) -> Style {
    match status {
        LengthStatus::Normal => Style::default().fg(MUTED),
        LengthStatus::NearLimit => Style::default().fg(WARNING),
        LengthStatus::OverLimit => Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
    }
}

pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

pub fn key_hint() -> Style {
    Style::default().fg(SUCCESS)
}

pub fn key_destructive() -> Style {
    Style::default().fg(ERROR)
}

//! Chat UI rendering components

use super::state::ChatState;
use crate::tui::theme;
use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use simplechat_core::types::Message;
use simplechat_core::validation::LengthStatus;

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(frame: &mut Frame, state: &ChatState) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Messages
            Constraint::Length(3), // Input
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        Self::render_header(frame, chunks[0], state);
        Self::render_messages(frame, chunks[1], state);
        Self::render_input(frame, chunks[2], state);
        Self::render_help_bar(frame, chunks[3], state);

        if state.confirm_reset {
            Self::render_confirm(frame, area);
        }
    }

    fn render_header(frame: &mut Frame, area: Rect, state: &ChatState) {
        let status = if state.is_pending() {
            Span::styled(format!("● {}", state.typing.label()), theme::typing())
        } else {
            Span::styled("● Online", theme::online())
        };

        let backend = if state.info.remote {
            state.info.model.clone()
        } else {
            "offline mode".to_string()
        };

        let mut spans = vec![
            Span::styled(" AI ", theme::avatar()),
            Span::raw(" "),
            Span::styled("Simple Chat", theme::title()),
            Span::styled("  │ ", theme::border()),
            status,
            Span::styled(" │ ", theme::border()),
            Span::styled(backend, theme::subtitle()),
        ];
        if let Some(msg) = &state.status_message {
            spans.push(Span::styled(format!(" │ {msg}"), theme::subtitle()));
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_messages(frame: &mut Frame, area: Rect, state: &ChatState) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let bubble_width = (inner_width * 4 / 5).max(10);

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled("TODAY", theme::separator())).alignment(Alignment::Center),
            Line::from(""),
        ];

        for msg in state.messages() {
            lines.extend(bubble_lines(msg, bubble_width));
            lines.push(Line::from(""));
        }

        if state.is_pending() {
            lines.push(Line::from(Span::styled("Assistant", theme::sender_label())));
            lines.push(Line::from(Span::styled(
                format!(" {} ", state.typing.label()),
                theme::typing(),
            )));
        }

        let inner_height = area.height as usize;
        let max_scroll = lines.len().saturating_sub(inner_height).min(u16::MAX as usize) as u16;
        state.max_scroll.set(max_scroll);
        let scroll = state.scroll_offset.min(max_scroll);

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(theme::border());

        let para = Paragraph::new(lines).block(block).scroll((scroll, 0));
        frame.render_widget(para, area);
    }

    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState) {
        let gauge = state.gauge();
        let visible = area.width.saturating_sub(6) as usize;

        let (display, style) = if state.is_pending() {
            ("Waiting for response...".to_string(), theme::placeholder())
        } else if state.input.is_empty() {
            ("Type a message...".to_string(), theme::placeholder())
        } else {
            (input_window(&state.input, state.cursor_pos, visible), theme::text())
        };

        let border_style = if gauge.is_over_limit() {
            theme::border_error()
        } else if state.is_pending() {
            theme::border()
        } else {
            theme::border_active()
        };

        let counter = Line::from(Span::styled(
            format!(" {} ", gauge.counter_label()),
            theme::counter(gauge.status),
        ))
        .alignment(Alignment::Right);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(if state.is_command() {
                " Command "
            } else {
                " Message "
            })
            .title(counter);

        let line = Line::from(vec![
            Span::styled("> ", theme::border_active()),
            Span::styled(display, style),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_help_bar(frame: &mut Frame, area: Rect, state: &ChatState) {
        let help = if state.is_pending() {
            Line::from(Span::styled(" Waiting for a reply... ", theme::typing()))
        } else if let LengthStatus::OverLimit = state.gauge().status {
            Line::from(Span::styled(
                " Message is too long to send ",
                theme::counter(LengthStatus::OverLimit),
            ))
        } else {
            Line::from(vec![
                Span::styled(" Enter", theme::key_hint()),
                Span::styled(": Send │ ", theme::footer()),
                Span::styled("Ctrl+L", theme::key_destructive()),
                Span::styled(": Clear │ ", theme::footer()),
                Span::styled("PageUp/Down", theme::key_hint()),
                Span::styled(": Scroll │ ", theme::footer()),
                Span::styled("/help", theme::key_hint()),
                Span::styled(" │ ", theme::footer()),
                Span::styled("Ctrl+Q", theme::key_destructive()),
                Span::styled(": Exit ", theme::footer()),
            ])
        };
        frame.render_widget(Paragraph::new(help), area);
    }

    fn render_confirm(frame: &mut Frame, area: Rect) {
        let popup = centered(area, 50, 5);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_error())
            .title(" Clear Chat History ");
        let text = vec![
            Line::from("Are you sure you want to clear the conversation history?"),
            Line::from(vec![
                Span::styled("y", theme::key_destructive()),
                Span::styled(": clear   ", theme::footer()),
                Span::styled("n", theme::key_hint()),
                Span::styled(": keep", theme::footer()),
            ]),
        ];
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(text)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            popup,
        );
    }
}

/// Lines of one message bubble: sender label, wrapped text, local time
pub fn bubble_lines(msg: &Message, width: usize) -> Vec<Line<'static>> {
    let (label, style, alignment) = if msg.is_user() {
        ("You", theme::user_bubble(), Alignment::Right)
    } else if msg.is_error {
        ("Assistant", theme::error_bubble(), Alignment::Left)
    } else {
        ("Assistant", theme::bot_bubble(), Alignment::Left)
    };

    let mut lines =
        vec![Line::from(Span::styled(label, theme::sender_label())).alignment(alignment)];
    for row in wrap_text(&msg.text, width.saturating_sub(2).max(1)) {
        lines.push(Line::from(Span::styled(format!(" {row} "), style)).alignment(alignment));
    }
    let time = msg.timestamp.with_timezone(&Local).format("%H:%M").to_string();
    lines.push(Line::from(Span::styled(time, theme::timestamp())).alignment(alignment));
    lines
}

/// Word-wrap `text` to `width` terminal columns, keeping explicit newlines.
/// Wide glyphs (CJK, emoji) count as two columns.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split(' ') {
            let word_width = display_width(word);
            let sep = usize::from(current_width > 0);
            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }
            if current_width > 0 {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            // A word wider than a row is split at the column limit
            for c in word.chars() {
                let glyph = char_width(c);
                if current_width > 0 && current_width + glyph > width {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += glyph;
            }
        }
        rows.push(current);
    }
    rows
}

fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

fn char_width(c: char) -> usize {
    let mut buf = [0u8; 4];
    display_width(c.encode_utf8(&mut buf))
}

/// Slice of the input that keeps the cursor visible, with a cursor marker
fn input_window(input: &str, cursor: usize, visible: usize) -> String {
    let mut chars: Vec<char> = input.chars().collect();
    if cursor >= chars.len() {
        chars.push('_');
    } else {
        chars.insert(cursor, '|');
    }
    let visible = visible.max(1);
    let start = (cursor + 1).saturating_sub(visible);
    chars.into_iter().skip(start).take(visible).collect()
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

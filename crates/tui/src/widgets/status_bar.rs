//! Status bar rendering widget.
//!
//! The footer shows the keybinding hints for the active input mode, or the
//! most recent notice when there is one.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::event::InputMode;

/// Severity of a status bar notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Confirmation of a completed action.
    Info,
    /// Something failed.
    Error,
}

/// A one-line message shown in place of the key hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// The message text.
    pub text: String,
    /// How the message is coloured.
    pub level: NoticeLevel,
}

impl Notice {
    /// Creates an informational notice.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Info,
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Error,
        }
    }
}

fn hints(mode: InputMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        InputMode::Board => &[
            ("Ctrl+C", "Quit"),
            ("←→↑↓", "Navigate"),
            ("n", "New"),
            ("Enter", "Edit"),
            ("f", "Filter"),
            ("?", "Help"),
        ],
        InputMode::Form => &[
            ("Enter", "Save"),
            ("Tab", "Next field"),
            ("Esc", "Cancel"),
            ("Ctrl+C", "Quit"),
        ],
        InputMode::Prompt => &[("Enter", "Import"), ("Esc", "Cancel"), ("Ctrl+C", "Quit")],
        InputMode::Confirm => &[("y", "Yes"), ("n", "No")],
    }
}

/// Renders the status bar.
///
/// A notice, when present, replaces the hints; errors are drawn in red.
///
/// ```text
/// ┌────────────────────────────────────────────────────┐
/// │Ctrl+C Quit  ←→↑↓ Navigate  n New  Enter Edit       │
/// └────────────────────────────────────────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tracker_tui::InputMode;
/// use tracker_tui::widgets::{Notice, render_status_bar};
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(InputMode::Board, None, area, &mut buf);
/// render_status_bar(InputMode::Board, Some(&Notice::info("Exported")), area, &mut buf);
/// ```
pub fn render_status_bar(mode: InputMode, notice: Option<&Notice>, area: Rect, buf: &mut Buffer) {
    let line = match notice {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Info => Color::Cyan,
                NoticeLevel::Error => Color::Red,
            };
            Line::from(Span::styled(notice.text.as_str(), Style::default().fg(color)))
        }
        None => {
            let key_style = Style::default().fg(Color::Yellow);
            let text_style = Style::default().fg(Color::White);
            let spans = hints(mode)
                .iter()
                .flat_map(|(key, action)| {
                    [
                        Span::styled(*key, key_style),
                        Span::styled(format!(" {action}  "), text_style),
                    ]
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        }
    };

    Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

//! Help overlay widget.
//!
//! This module provides the help overlay that lists the board keybindings
//! when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 42;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 23;

/// Key column width, including the leading indent.
const KEY_WIDTH: usize = 16;

/// Renders a centered help overlay displaying all keybindings.
///
/// The area behind the panel is cleared first so the board does not bleed
/// through.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tracker_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 30);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

const NAVIGATION: &[(&str, &str)] = &[
    ("←/→", "Previous/next column"),
    ("↑/↓", "Previous/next card"),
    ("Esc", "Clear selection"),
];

const CARDS: &[(&str, &str)] = &[
    ("n", "New card"),
    ("Enter", "Edit selected card"),
    ("Shift+←/→", "Move card"),
    ("Drag", "Move card with the mouse"),
    ("d / Delete", "Delete card"),
];

const BOARD: &[(&str, &str)] = &[
    ("f", "Cycle project filter"),
    ("e", "Export to JSON"),
    ("i", "Import from JSON"),
    ("?", "Toggle help"),
    ("Ctrl+C", "Quit"),
];

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::with_capacity(usize::from(HELP_HEIGHT));
    for (title, bindings) in [("Navigation", NAVIGATION), ("Cards", CARDS), ("Board", BOARD)] {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {title}"), header_style)));
        lines.extend(bindings.iter().map(|&(key, action)| binding_line(key, action)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}

fn binding_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {key:<width$}", width = KEY_WIDTH - 2),
            Style::default().fg(Color::Green),
        ),
        Span::styled(action, Style::default().fg(Color::White)),
    ])
}

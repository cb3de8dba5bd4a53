//! Confirmation dialog and import path prompt.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::form::input_spans;
use crate::form::TextInput;
use crate::layout::{CONFIRM_HEIGHT, CONFIRM_WIDTH, PROMPT_HEIGHT, PROMPT_WIDTH, centered_rect};

fn modal_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// Renders a yes/no confirmation centered in `area`.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tracker_tui::widgets::render_confirm_dialog;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_confirm_dialog("Delete \"Write docs\"?", area, &mut buf);
/// ```
pub fn render_confirm_dialog(message: &str, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(CONFIRM_WIDTH, CONFIRM_HEIGHT, area);
    Clear.render(popup, buf);

    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", key_style),
            Span::styled(" Yes   ", text_style),
            Span::styled("n", key_style),
            Span::styled(" No", text_style),
        ]),
    ];

    Paragraph::new(lines)
        .block(modal_block(" Confirm ", Color::LightRed))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(popup, buf);
}

/// Renders the import path prompt centered in `area`.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tracker_tui::form::TextInput;
/// use tracker_tui::widgets::render_import_prompt;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_import_prompt(&TextInput::new("cards.json"), area, &mut buf);
/// ```
pub fn render_import_prompt(input: &TextInput, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(PROMPT_WIDTH, PROMPT_HEIGHT, area);
    Clear.render(popup, buf);

    let block = modal_block(" Import ", Color::LightCyan);
    let inner = block.inner(popup);
    block.render(popup, buf);

    let width = usize::from(inner.width).saturating_sub(7);
    let mut path = vec![Span::styled(" File: ", Style::default().fg(Color::Cyan))];
    path.extend(input_spans(input, true, width));

    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(path),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter", key_style),
            Span::styled(" Import  ", text_style),
            Span::styled("Esc", key_style),
            Span::styled(" Cancel", text_style),
        ]),
    ];

    Paragraph::new(lines).render(inner, buf);
}

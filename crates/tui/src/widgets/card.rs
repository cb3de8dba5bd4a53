//! Card rendering widget.
//!
//! A card shows its title, the first line of its description, and a meta
//! line with the project tag and the deadline badge. The border colour
//! follows the card's column.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tracker_protocol::{Card, DeadlineBadge, DeadlineUrgency, Status};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the border color for cards in a column.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use tracker_protocol::Status;
/// use tracker_tui::widgets::status_color;
///
/// assert_eq!(status_color(Status::Backlog), Color::DarkGray);
/// assert_eq!(status_color(Status::InProgress), Color::Blue);
/// assert_eq!(status_color(Status::Done), Color::Green);
/// ```
#[must_use]
pub const fn status_color(status: Status) -> Color {
    match status {
        Status::Backlog => Color::DarkGray,
        Status::InProgress => Color::Blue,
        Status::Done => Color::Green,
    }
}

/// Brighter variant of [`status_color`] for the selected card.
#[must_use]
const fn status_color_bright(status: Status) -> Color {
    match status {
        Status::Backlog => Color::Gray,
        Status::InProgress => Color::LightBlue,
        Status::Done => Color::LightGreen,
    }
}

/// Returns the text color for a deadline badge.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use tracker_protocol::DeadlineUrgency;
/// use tracker_tui::widgets::urgency_color;
///
/// assert_eq!(urgency_color(DeadlineUrgency::Overdue), Color::Red);
/// assert_eq!(urgency_color(DeadlineUrgency::Soon), Color::Yellow);
/// ```
#[must_use]
pub const fn urgency_color(urgency: DeadlineUrgency) -> Color {
    match urgency {
        DeadlineUrgency::Overdue => Color::Red,
        DeadlineUrgency::Soon => Color::Yellow,
        DeadlineUrgency::Neutral => Color::DarkGray,
    }
}

/// Renders a card to the buffer.
///
/// ```text
/// ┌────────────────────┐
/// │Title               │
/// │description...      │
/// │#project  2d left   │
/// └────────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tracker_protocol::{Card, CardDraft};
/// use tracker_tui::widgets::render_card;
///
/// let card = Card::create(CardDraft::new("Implement feature").unwrap(), Utc::now());
/// let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let area = Rect::new(0, 0, 24, 5);
/// let mut buf = Buffer::empty(area);
///
/// render_card(&card, false, today, area, &mut buf);
/// ```
pub fn render_card(card: &Card, is_selected: bool, today: NaiveDate, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_color, title_style, desc_style) = if is_selected {
        (
            status_color_bright(card.status),
            Style::default()
                .fg(status_color_bright(card.status))
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else {
        (
            status_color(card.status),
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        )
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let first_line = card.description.lines().next().unwrap_or_default();

    let content = vec![
        Line::from(Span::styled(
            truncate_string(&card.title, inner_width),
            title_style,
        )),
        Line::from(Span::styled(
            truncate_string(first_line, inner_width),
            desc_style,
        )),
        meta_line(card, today, inner_width),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    Paragraph::new(content).block(block).render(area, buf);
}

/// Builds the project tag and deadline badge line.
fn meta_line(card: &Card, today: NaiveDate, width: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(3);
    let mut used = 0;

    if let Some(badge) = DeadlineBadge::for_deadline(card.deadline, today) {
        used = badge.label.width();
        let mut style = Style::default().fg(urgency_color(badge.urgency));
        if badge.urgency == DeadlineUrgency::Overdue {
            style = style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(badge.label, style));
    }

    if card.has_project() {
        let room = width.saturating_sub(used + 2);
        let tag = truncate_string(&format!("#{}", card.project), room);
        if !tag.is_empty() {
            let tag_span = Span::styled(tag, Style::default().fg(Color::Magenta));
            if spans.is_empty() {
                spans.push(tag_span);
            } else {
                spans.insert(0, Span::raw("  "));
                spans.insert(0, tag_span);
            }
        }
    }

    Line::from(spans)
}

/// Truncates a string to fit within `max_width` terminal columns, adding an
/// ellipsis if needed. Wide characters count as two columns.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        format!("{}...", take_width(s, max_width - 3))
    } else {
        take_width(s, max_width).to_string()
    }
}

/// Longest prefix of `s` that fits in `width` columns.
pub(crate) fn take_width(s: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &s[..i];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use chrono::Utc;
    use tracker_protocol::CardDraft;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn card(project: &str, deadline: Option<NaiveDate>) -> Card {
        let draft = CardDraft::new("Write docs")
            .unwrap()
            .with_description("First line\nsecond line")
            .with_project(project)
            .with_deadline(deadline);
        Card::create(draft, Utc::now())
    }

    #[test]
    fn truncate_string_cases() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello", 5), "Hello");
        assert_eq!(truncate_string("Hello, World!", 10), "Hello, ...");
        assert_eq!(truncate_string("Hello", 3), "Hel");
    }

    #[test]
    fn truncate_string_counts_wide_characters_twice() {
        assert_eq!(truncate_string("日本語のタイトル", 16), "日本語のタイトル");
        assert_eq!(truncate_string("日本語のタイトル", 9), "日本語...");
        assert_eq!(truncate_string("日本語のタイトル", 10), "日本語...");
        assert_eq!(truncate_string("🚀 Launch day", 8), "🚀 La...");
        assert_eq!(truncate_string("日本", 3), "日");

        for width in 0..20 {
            assert!(truncate_string("日本語のタイトル 🚀", width).width() <= width);
        }
    }

    #[test]
    fn renders_title_description_and_meta() {
        let card = card("web", NaiveDate::from_ymd_opt(2024, 1, 9));
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        render_card(&card, false, today(), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Write docs"));
        assert!(content.contains("First line"));
        assert!(!content.contains("second line"));
        assert!(content.contains("#web  1d overdue"));
    }

    #[test]
    fn overdue_badge_is_red() {
        let card = card("", NaiveDate::from_ymd_opt(2024, 1, 9));
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        render_card(&card, false, today(), area, &mut buf);

        // Meta line is the third inner row; the badge starts at the left edge.
        let cell = buf.cell((1, 3)).unwrap();
        assert_eq!(cell.symbol(), "1");
        assert_eq!(cell.fg, Color::Red);
    }

    #[test]
    fn soon_badge_is_yellow() {
        let card = card("", NaiveDate::from_ymd_opt(2024, 1, 10));
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        render_card(&card, false, today(), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Today"));
        assert_eq!(buf.cell((1, 3)).unwrap().fg, Color::Yellow);
    }

    #[test]
    fn card_without_project_or_deadline_has_empty_meta() {
        let card = card("", None);
        let line = meta_line(&card, today(), 20);
        assert!(line.spans.is_empty());
    }

    #[test]
    fn handles_small_area() {
        let card = card("web", None);
        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        render_card(&card, false, today(), area, &mut buf);
    }
}

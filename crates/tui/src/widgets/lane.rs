//! Column rendering widget.
//!
//! This module renders one board column: a header with the column name and
//! its visible card count, followed by a vertical list of cards. The card
//! geometry is also exposed for mouse hit-testing through [`card_at`].

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tracker_protocol::ColumnView;

use super::card::render_card;
use crate::layout::CARD_HEIGHT;

/// Position of a column in the horizontal layout.
///
/// Used to determine which borders to render, so that adjacent columns
/// share a single border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanePosition {
    /// Leftmost column, rounded corners on the left.
    First,
    /// Middle column, T-connectors on the left.
    Middle,
    /// Rightmost column, T-connectors on the left and rounded on the right.
    Last,
}

impl LanePosition {
    /// Returns the position of the column at `index` among `count` columns.
    #[must_use]
    pub const fn for_index(index: usize, count: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 >= count {
            Self::Last
        } else {
            Self::Middle
        }
    }

    const fn borders(self) -> Borders {
        match self {
            Self::First | Self::Middle => Borders::TOP.union(Borders::BOTTOM).union(Borders::LEFT),
            Self::Last => Borders::ALL,
        }
    }
}

const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Where a column is drawn and how it is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneStyle {
    /// Position in the horizontal layout.
    pub position: LanePosition,
    /// Whether this column has keyboard focus.
    pub is_focused: bool,
    /// Whether the column to the left has focus (its border is shared).
    pub prev_focused: bool,
    /// Whether a dragged card is hovering over this column.
    pub is_drop_target: bool,
}

/// Renders a single column to the buffer.
///
/// Empty columns show a "No cards" placeholder.
///
/// ```text
/// ╭ In Progress (2) ────
/// │┌─────────────────┐
/// ││Card title       │
/// ││description     │
/// ││#web  2d left    │
/// │└─────────────────┘
/// ╰─────────────────────
/// ```
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tracker_protocol::{Board, BoardView, CardDraft, Command, ProjectFilter, Status};
/// use tracker_tui::widgets::{LanePosition, LaneStyle, render_lane};
///
/// let mut board = Board::new();
/// let _ = board.apply(Command::Create(CardDraft::new("Card").unwrap()), Utc::now());
/// let view = BoardView::derive(&board, &ProjectFilter::All);
/// let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
///
/// let area = Rect::new(0, 0, 24, 15);
/// let mut buf = Buffer::empty(area);
/// let style = LaneStyle {
///     position: LanePosition::First,
///     is_focused: true,
///     prev_focused: false,
///     is_drop_target: false,
/// };
///
/// render_lane(view.column(Status::Backlog), Some(0), style, today, area, &mut buf);
/// ```
pub fn render_lane(
    column: &ColumnView<'_>,
    selected_idx: Option<usize>,
    style: LaneStyle,
    today: NaiveDate,
    area: Rect,
    buf: &mut Buffer,
) {
    let highlight = if style.is_drop_target {
        Color::Yellow
    } else {
        Color::Cyan
    };
    let border_style = if style.is_focused || style.is_drop_target {
        Style::default().fg(highlight)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = format!(" {} ({}) ", column.status.display_name(), column.count());
    let title_style = if style.is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let border_set = match style.position {
        LanePosition::First => BORDER_SET_FIRST,
        LanePosition::Middle => BORDER_SET_MIDDLE,
        LanePosition::Last => BORDER_SET_LAST,
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(style.position.borders())
        .border_set(border_set)
        .border_style(border_style);

    let inner_area = block.inner(area);
    block.render(area, buf);

    // The left border is shared with the previous column; keep it lit when
    // that column has focus.
    if style.prev_focused && !style.is_focused && !style.is_drop_target && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    if column.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    let selected_idx = selected_idx.filter(|_| style.is_focused);
    let visible = visible_cards(inner_area);
    let scroll_offset = calculate_scroll_offset(selected_idx, column.count(), visible);

    let shown = column.count().min(visible);
    let mut constraints: Vec<Constraint> = (0..shown)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let card_areas = Layout::vertical(constraints).split(inner_area);

    for (i, card_area) in card_areas.iter().take(shown).enumerate() {
        let card_idx = scroll_offset + i;
        let Some(card) = column.cards.get(card_idx) else {
            break;
        };
        render_card(card, selected_idx == Some(card_idx), today, *card_area, buf);
    }
}

/// Returns the index of the card drawn at `row` in a column occupying
/// `area`, if any.
///
/// `selected_idx` must be the same selection passed to [`render_lane`]
/// (`None` for unfocused columns) so the scroll offset matches.
#[must_use]
pub fn card_at(
    area: Rect,
    position: LanePosition,
    card_count: usize,
    selected_idx: Option<usize>,
    row: u16,
) -> Option<usize> {
    let inner = Block::default().borders(position.borders()).inner(area);
    if row < inner.y || row >= inner.y.saturating_add(inner.height) {
        return None;
    }

    let visible = visible_cards(inner);
    let slot = usize::from((row - inner.y) / CARD_HEIGHT);
    if slot >= visible {
        return None;
    }

    let idx = calculate_scroll_offset(selected_idx, card_count, visible) + slot;
    (idx < card_count).then_some(idx)
}

fn visible_cards(inner: Rect) -> usize {
    usize::from((inner.height / CARD_HEIGHT).max(1))
}

fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No cards",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Calculates the scroll offset that keeps the selected card visible.
fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_cards: usize,
    visible_cards: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total_cards <= visible_cards {
        return 0;
    }

    let max_offset = total_cards.saturating_sub(visible_cards);

    if selected < visible_cards / 2 {
        0
    } else {
        (selected.saturating_sub(visible_cards / 2)).min(max_offset)
    }
}

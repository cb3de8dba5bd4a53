//! Board rendering widget.
//!
//! Renders the three columns of a [`BoardView`] side by side.

use chrono::NaiveDate;
use ratatui::{buffer::Buffer, layout::Rect};
use tracker_protocol::{BoardView, Status};

use super::lane::{LanePosition, LaneStyle, render_lane};
use crate::layout::column_areas;

/// Selection and drag state the board needs for highlighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardHighlight {
    /// Index of the focused column (0-2).
    pub selected_column: usize,
    /// Index of the selected card within the focused column, if any.
    pub selected_card: Option<usize>,
    /// Column a dragged card would be dropped into, if a drag is active.
    pub drop_target: Option<Status>,
}

/// Renders the board to the buffer.
///
/// ```text
/// ╭ Backlog (2) ──┬ In Progress (1) ┬ Done (0) ──────╮
/// │┌────────────┐ │┌─────────────┐  │No cards        │
/// ││Card 1      │ ││Card 3       │  │                │
/// ```
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tracker_protocol::{Board, BoardView, CardDraft, Command, ProjectFilter};
/// use tracker_tui::widgets::{BoardHighlight, render_board};
///
/// let mut board = Board::new();
/// let _ = board.apply(Command::Create(CardDraft::new("Card 1").unwrap()), Utc::now());
/// let view = BoardView::derive(&board, &ProjectFilter::All);
/// let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
///
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&view, BoardHighlight::default(), today, area, &mut buf);
/// ```
pub fn render_board(
    view: &BoardView<'_>,
    highlight: BoardHighlight,
    today: NaiveDate,
    area: Rect,
    buf: &mut Buffer,
) {
    let areas = column_areas(area);
    let count = view.columns.len();

    for (i, column) in view.columns.iter().enumerate() {
        let is_focused = highlight.selected_column == i;
        let style = LaneStyle {
            position: LanePosition::for_index(i, count),
            is_focused,
            prev_focused: i > 0 && highlight.selected_column == i - 1,
            is_drop_target: highlight.drop_target == Some(column.status),
        };
        let selection = if is_focused {
            highlight.selected_card
        } else {
            None
        };

        render_lane(column, selection, style, today, areas[i], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use chrono::Utc;
    use tracker_protocol::{Board, CardDraft, Command, ProjectFilter};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn render_empty_board() {
        let board = Board::new();
        let view = BoardView::derive(&board, &ProjectFilter::All);
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        render_board(&view, BoardHighlight::default(), today(), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Backlog (0)"));
        assert!(content.contains("In Progress (0)"));
        assert!(content.contains("Done (0)"));
        assert_eq!(content.matches("No cards").count(), 3);
    }

    #[test]
    fn render_board_shows_filtered_counts() {
        let mut board = Board::new();
        for (title, project) in [("Alpha", "web"), ("Beta", "ops"), ("Gamma", "web")] {
            let draft = CardDraft::new(title).unwrap().with_project(project);
            let _ = board.apply(Command::Create(draft), Utc::now());
        }
        let view = BoardView::derive(&board, &ProjectFilter::project("web"));
        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);

        render_board(&view, BoardHighlight::default(), today(), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Backlog (2)"));
        assert!(content.contains("Alpha"));
        assert!(content.contains("Gamma"));
        assert!(!content.contains("Beta"));
    }
}

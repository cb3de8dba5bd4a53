//! Centralized layout measurements for the TUI.
//!
//! Rendering and mouse hit-testing must agree on where things are, so both
//! go through the functions in this module.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header bar in rows.
///
/// The header displays the application title, the active filter, and the
/// help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of each card in rows.
///
/// Border (2 rows) plus title, description, and project/deadline lines.
pub const CARD_HEIGHT: u16 = 5;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message. The board
/// needs room for one card plus its column border, and the status bar sits
/// below it.
pub const MIN_HEIGHT: u16 = CARD_HEIGHT + 2 + STATUS_BAR_HEIGHT;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The board has 3 columns; each needs about 15 characters for borders and
/// truncated titles to be readable.
pub const MIN_WIDTH: u16 = 45;

/// Size of the add/edit card modal.
pub const FORM_WIDTH: u16 = 60;
/// Height of the add/edit card modal.
pub const FORM_HEIGHT: u16 = 13;

/// Size of the confirmation dialog.
pub const CONFIRM_WIDTH: u16 = 50;
/// Height of the confirmation dialog.
pub const CONFIRM_HEIGHT: u16 = 6;

/// Size of the import path prompt.
pub const PROMPT_WIDTH: u16 = 60;
/// Height of the import path prompt.
pub const PROMPT_HEIGHT: u16 = 6;

/// The main regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Header bar, absent in compact mode.
    pub header: Option<Rect>,
    /// The three board columns.
    pub board: Rect,
    /// Footer with key hints or the current notice.
    pub status_bar: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area into header, board, and status bar.
    ///
    /// Returns `None` when the area is too small to render anything useful.
    #[must_use]
    pub fn compute(area: Rect) -> Option<Self> {
        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            return None;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        let header_height = if show_header { HEADER_HEIGHT } else { 0 };

        let [header, board, status_bar] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        Some(Self {
            header: show_header.then_some(header),
            board,
            status_bar,
        })
    }
}

/// Splits the board area into three equal columns.
#[must_use]
pub fn column_areas(board: Rect) -> [Rect; 3] {
    Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(board)
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_positions_correctly() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = centered_rect(20, 10, area);

        assert_eq!(centered.x, 30);
        assert_eq!(centered.y, 7);
        assert_eq!(centered.width, 20);
        assert_eq!(centered.height, 10);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 12);
        let centered = centered_rect(100, 50, area);

        assert_eq!(centered, area);
    }

    #[test]
    fn screen_layout_too_small() {
        assert!(ScreenLayout::compute(Rect::new(0, 0, 80, MIN_HEIGHT - 1)).is_none());
        assert!(ScreenLayout::compute(Rect::new(0, 0, MIN_WIDTH - 1, 40)).is_none());
    }

    #[test]
    fn screen_layout_compact_hides_header() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, MIN_HEIGHT)).unwrap();
        assert!(layout.header.is_none());
        assert_eq!(layout.board.y, 0);
        assert_eq!(layout.status_bar.height, STATUS_BAR_HEIGHT);
    }

    #[test]
    fn screen_layout_full() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 90, 30)).unwrap();
        assert_eq!(layout.header, Some(Rect::new(0, 0, 90, HEADER_HEIGHT)));
        assert_eq!(layout.board, Rect::new(0, 3, 90, 24));
        assert_eq!(layout.status_bar, Rect::new(0, 27, 90, 3));
    }

    #[test]
    fn column_areas_cover_board() {
        let columns = column_areas(Rect::new(0, 3, 90, 24));
        assert_eq!(columns[0].x, 0);
        assert_eq!(columns.iter().map(|c| c.width).sum::<u16>(), 90);
        assert!(columns.iter().all(|c| c.height == 24));
    }
}

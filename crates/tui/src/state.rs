//! Board selection state.
//!
//! The selection is an index into the *filtered* columns, so every method
//! that moves it takes the current [`BoardView`]. The view is derived fresh
//! each frame; after any change to the board or the filter the selection is
//! clamped back into range with [`AppState::clamp`].

use tracker_protocol::{BoardView, Card, CardId, Status};

/// The application state that outlives a single frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Index of the focused column (0-2).
    pub selected_column: usize,
    /// Index of the selected card within the focused column, if any.
    pub selected_card: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// Creates a new state focused on the first column with nothing selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracker_tui::AppState;
    ///
    /// let state = AppState::new();
    /// assert_eq!(state.selected_column, 0);
    /// assert!(state.selected_card.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the status of the focused column.
    #[must_use]
    pub fn selected_status(&self) -> Status {
        Status::from_index(self.selected_column).unwrap_or_default()
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Moves the column focus to the left, wrapping around.
    pub fn navigate_left(&mut self, view: &BoardView<'_>) {
        self.selected_column = (self.selected_column + 2) % 3;
        self.clamp(view);
    }

    /// Moves the column focus to the right, wrapping around.
    pub fn navigate_right(&mut self, view: &BoardView<'_>) {
        self.selected_column = (self.selected_column + 1) % 3;
        self.clamp(view);
    }

    /// Moves the card selection up within the focused column, wrapping to
    /// the bottom.
    pub fn navigate_up(&mut self, view: &BoardView<'_>) {
        let len = self.column_len(view);
        self.selected_card = match (len, self.selected_card) {
            (0, _) => None,
            (_, Some(idx)) if idx > 0 => Some(idx - 1),
            (_, Some(_)) => Some(len - 1),
            (_, None) => Some(0),
        };
    }

    /// Moves the card selection down within the focused column, wrapping to
    /// the top.
    pub fn navigate_down(&mut self, view: &BoardView<'_>) {
        let len = self.column_len(view);
        self.selected_card = match (len, self.selected_card) {
            (0, _) => None,
            (_, Some(idx)) if idx + 1 < len => Some(idx + 1),
            (_, _) => Some(0),
        };
    }

    /// Returns the selected card, if any.
    #[must_use]
    pub fn selected<'a>(&self, view: &BoardView<'a>) -> Option<&'a Card> {
        let idx = self.selected_card?;
        view.column(self.selected_status()).cards.get(idx).copied()
    }

    /// Selects the card with `id` if it is visible in `view`.
    ///
    /// Returns `false` (and leaves the selection alone) otherwise.
    pub fn select_card(&mut self, view: &BoardView<'_>, id: CardId) -> bool {
        for column in &view.columns {
            if let Some(idx) = column.cards.iter().position(|c| c.id == id) {
                self.selected_column = column.status.index();
                self.selected_card = Some(idx);
                return true;
            }
        }
        false
    }

    /// Clears the current card selection.
    pub fn clear_selection(&mut self) {
        self.selected_card = None;
    }

    /// Ensures the card selection is valid for the focused column.
    pub fn clamp(&mut self, view: &BoardView<'_>) {
        let len = self.column_len(view);
        if len == 0 {
            self.selected_card = None;
        } else if let Some(idx) = self.selected_card
            && idx >= len
        {
            self.selected_card = Some(len - 1);
        }
    }

    fn column_len(&self, view: &BoardView<'_>) -> usize {
        view.column(self.selected_status()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tracker_protocol::{Board, CardDraft, Command, ProjectFilter};

    fn board_with(cards: &[(&str, &str, Status)]) -> Board {
        let mut board = Board::new();
        for (title, project, status) in cards {
            let draft = CardDraft::new(title)
                .unwrap()
                .with_project(project)
                .with_status(*status);
            let _ = board.apply(Command::Create(draft), Utc::now());
        }
        board
    }

    #[test]
    fn new_state_defaults() {
        let state = AppState::new();
        assert_eq!(state.selected_status(), Status::Backlog);
        assert!(!state.help_visible);
    }

    #[test]
    fn column_navigation_wraps() {
        let board = Board::new();
        let view = BoardView::derive(&board, &ProjectFilter::All);
        let mut state = AppState::new();

        state.navigate_left(&view);
        assert_eq!(state.selected_column, 2);
        state.navigate_right(&view);
        assert_eq!(state.selected_column, 0);
    }

    #[test]
    fn card_navigation_wraps() {
        let board = board_with(&[
            ("a", "", Status::Backlog),
            ("b", "", Status::Backlog),
            ("c", "", Status::Backlog),
        ]);
        let view = BoardView::derive(&board, &ProjectFilter::All);
        let mut state = AppState::new();

        state.navigate_down(&view);
        assert_eq!(state.selected_card, Some(0));
        state.navigate_up(&view);
        assert_eq!(state.selected_card, Some(2));
        state.navigate_down(&view);
        assert_eq!(state.selected_card, Some(0));
        assert_eq!(state.selected(&view).unwrap().title, "a");
    }

    #[test]
    fn navigation_in_empty_column_clears_selection() {
        let board = board_with(&[("a", "", Status::Backlog)]);
        let view = BoardView::derive(&board, &ProjectFilter::All);
        let mut state = AppState::new();
        state.navigate_down(&view);

        state.navigate_right(&view);
        assert_eq!(state.selected_card, None);
        state.navigate_down(&view);
        assert_eq!(state.selected_card, None);
    }

    #[test]
    fn selection_follows_filter() {
        let board = board_with(&[
            ("a", "web", Status::Backlog),
            ("b", "ops", Status::Backlog),
            ("c", "ops", Status::Backlog),
        ]);
        let mut state = AppState {
            selected_card: Some(2),
            ..AppState::default()
        };

        let view = BoardView::derive(&board, &ProjectFilter::project("web"));
        state.clamp(&view);
        assert_eq!(state.selected_card, Some(0));
        assert_eq!(state.selected(&view).unwrap().title, "a");
    }

    #[test]
    fn select_card_finds_column() {
        let board = board_with(&[("a", "", Status::Backlog), ("b", "", Status::Done)]);
        let view = BoardView::derive(&board, &ProjectFilter::All);
        let id = board.cards()[1].id;
        let mut state = AppState::new();

        assert!(state.select_card(&view, id));
        assert_eq!(state.selected_status(), Status::Done);
        assert_eq!(state.selected_card, Some(0));

        assert!(!state.select_card(&view, CardId::from_u128(9)));
    }

    #[test]
    fn dismiss_help() {
        let mut state = AppState::new();
        assert!(!state.dismiss_help());
        state.toggle_help();
        assert!(state.dismiss_help());
        assert!(!state.help_visible);
    }
}

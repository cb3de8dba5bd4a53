//! Filtered, per-column views of the board.
//!
//! Views borrow from the [`Board`] and are rebuilt on every frame; nothing
//! here is persisted.

use std::collections::BTreeSet;
use std::fmt;

use crate::board::Board;
use crate::card::{Card, Status};

/// Value shown for the "every project" filter option.
pub const ALL_PROJECTS: &str = "all";

/// The active project filter.
///
/// # Examples
///
/// ```
/// use tracker_protocol::ProjectFilter;
///
/// assert_eq!(ProjectFilter::All.to_string(), "all");
/// assert_eq!(ProjectFilter::project("web").to_string(), "web");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ProjectFilter {
    /// Show cards from every project, including untagged cards.
    #[default]
    All,
    /// Show only cards whose project equals this name.
    Project(String),
}

impl ProjectFilter {
    /// Shorthand for `ProjectFilter::Project(name.into())`.
    #[must_use]
    pub fn project(name: impl Into<String>) -> Self {
        Self::Project(name.into())
    }

    /// Returns `true` if the card passes this filter.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        match self {
            Self::All => true,
            Self::Project(name) => card.project == *name,
        }
    }

    /// Falls back to [`ProjectFilter::All`] when the filtered project no
    /// longer appears among `options`.
    #[must_use]
    pub fn reconcile(self, options: &[ProjectFilter]) -> Self {
        if options.contains(&self) {
            self
        } else {
            Self::All
        }
    }

    /// Returns the option after this one in `options`, wrapping around.
    #[must_use]
    pub fn cycle(&self, options: &[ProjectFilter]) -> Self {
        let next = options
            .iter()
            .position(|o| o == self)
            .map_or(0, |idx| (idx + 1) % options.len().max(1));
        options.get(next).cloned().unwrap_or_default()
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_PROJECTS),
            Self::Project(name) => f.write_str(name),
        }
    }
}

/// The distinct non-empty project names on the board.
///
/// Names are sorted by ordinal (byte) comparison, so uppercase names come
/// before lowercase ones.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use tracker_protocol::{project_names, Board, CardDraft, Command};
///
/// let board = ["Beta", "alpha", "Beta", ""].iter().fold(Board::new(), |b, p| {
///     b.transition(Command::Create(CardDraft::new("c").unwrap().with_project(p)), Utc::now())
/// });
/// assert_eq!(project_names(&board), ["Beta", "alpha"]);
/// ```
#[must_use]
pub fn project_names(board: &Board) -> Vec<&str> {
    board
        .cards()
        .iter()
        .map(|c| c.project.as_str())
        .filter(|p| !p.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The selectable filter options: "all" followed by [`project_names`].
#[must_use]
pub fn filter_options(board: &Board) -> Vec<ProjectFilter> {
    std::iter::once(ProjectFilter::All)
        .chain(project_names(board).into_iter().map(ProjectFilter::project))
        .collect()
}

/// Project names offered as completions for a partially typed project.
///
/// Matching is a case-insensitive prefix match; an empty prefix offers every
/// project.
#[must_use]
pub fn project_suggestions<'a>(board: &'a Board, prefix: &str) -> Vec<&'a str> {
    let prefix = prefix.trim().to_lowercase();
    project_names(board)
        .into_iter()
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .collect()
}

/// One visible column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    /// The status this column shows.
    pub status: Status,
    /// Cards passing the filter, in collection order.
    pub cards: Vec<&'a Card>,
}

impl ColumnView<'_> {
    /// Number of visible cards (the filtered count, not the column total).
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if no card is visible in this column.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The three columns of the board under a filter.
///
/// # Examples
///
/// ```
/// use tracker_protocol::{Board, BoardView, ProjectFilter};
///
/// let board = Board::new();
/// let view = BoardView::derive(&board, &ProjectFilter::All);
/// assert_eq!(view.columns.len(), 3);
/// assert!(view.columns.iter().all(|c| c.count() == 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    /// Columns in [`Status::all`] order.
    pub columns: [ColumnView<'a>; 3],
}

impl<'a> BoardView<'a> {
    /// Derives the visible columns of `board` under `filter`.
    #[must_use]
    pub fn derive(board: &'a Board, filter: &ProjectFilter) -> Self {
        let columns = Status::all().map(|status| ColumnView {
            status,
            cards: board.column(status).filter(|c| filter.matches(c)).collect(),
        });
        Self { columns }
    }

    /// Returns the column for a status.
    #[must_use]
    pub fn column(&self, status: Status) -> &ColumnView<'a> {
        &self.columns[status.index()]
    }
}

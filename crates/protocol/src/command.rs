//! Board commands.
//!
//! Every user action that changes the card collection is expressed as one
//! [`Command`] and applied through [`Board::apply`](crate::Board::apply).
//! Confirmation prompts happen before a command is built: a `Delete` or
//! `Replace` command is always executed.

use crate::card::{Card, CardDraft, CardId, Status};

/// A state transition on the card collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a new card built from the draft.
    Create(CardDraft),
    /// Overwrite the editable fields of an existing card.
    Update {
        /// The card to edit.
        id: CardId,
        /// The new field values.
        draft: CardDraft,
    },
    /// Remove a card.
    Delete {
        /// The card to remove.
        id: CardId,
    },
    /// Move a card to another column.
    Move {
        /// The card being dropped.
        id: CardId,
        /// The column it was dropped on.
        status: Status,
    },
    /// Replace the whole collection with imported cards.
    Replace(Vec<Card>),
}

impl Command {
    /// Returns a short name for logging.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracker_protocol::{CardId, Command};
    ///
    /// let cmd = Command::Delete { id: CardId::nil() };
    /// assert_eq!(cmd.name(), "delete");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::Move { .. } => "move",
            Self::Replace(_) => "replace",
        }
    }
}

/// Whether applying a command changed the collection.
///
/// Callers persist only on [`Outcome::Changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// The collection was modified.
    Changed,
    /// The command was a no-op (unknown id, same column, ...).
    Unchanged,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Changed`].
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

impl From<bool> for Outcome {
    fn from(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}

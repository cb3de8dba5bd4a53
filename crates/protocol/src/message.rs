//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application controller. Which keys produce
//! which message depends on the active mode (board, form, prompt, confirm),
//! so several messages are shared between modes.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// # Examples
///
/// ```
/// use tracker_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the left column.
    NavigateLeft,
    /// Move selection to the right column.
    NavigateRight,
    /// Move selection up within the current column.
    NavigateUp,
    /// Move selection down within the current column.
    NavigateDown,
    /// Open the selected card for editing.
    Select,
    /// Escape: close the open overlay or clear selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // --- Board actions ---
    /// Open the add-card form.
    NewCard,
    /// Ask to delete the selected card (or the card being edited).
    DeleteCard,
    /// Move the selected card one column to the left.
    MoveCardLeft,
    /// Move the selected card one column to the right.
    MoveCardRight,
    /// Switch to the next project filter option.
    CycleFilter,
    /// Export the board to a file.
    Export,
    /// Open the import path prompt.
    StartImport,
    /// Mouse button pressed at coordinates (column, row).
    PressAt {
        /// Column (x coordinate) of the press.
        column: u16,
        /// Row (y coordinate) of the press.
        row: u16,
    },
    /// Mouse moved with the button held, at coordinates (column, row).
    DragTo {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Mouse button released at coordinates (column, row).
    ReleaseAt {
        /// Column (x coordinate) of the release.
        column: u16,
        /// Row (y coordinate) of the release.
        row: u16,
    },

    // --- Text entry (form and prompt) ---
    /// Type a character into the focused field.
    Input {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last character of the focused field.
    Backspace,
    /// Focus the next form field.
    NextField,
    /// Focus the previous form field.
    PrevField,
    /// Left arrow inside a form field.
    FieldLeft,
    /// Right arrow inside a form field.
    FieldRight,
    /// Submit the form or prompt.
    Submit,
    /// Close the form or prompt, discarding edits.
    Cancel,

    // --- Confirmation dialog ---
    /// Accept the pending confirmation.
    Confirm,
    /// Reject the pending confirmation.
    Deny,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracker_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::Select.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message comes from the mouse.
    ///
    /// ```
    /// use tracker_protocol::Message;
    ///
    /// assert!(Message::DragTo { column: 3, row: 4 }.is_pointer());
    /// assert!(!Message::Select.is_pointer());
    /// ```
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PressAt { .. } | Self::DragTo { .. } | Self::ReleaseAt { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_navigation_detection() {
        assert!(Message::NavigateLeft.is_navigation());
        assert!(Message::NavigateRight.is_navigation());
        assert!(Message::NavigateUp.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(!Message::Select.is_navigation());
        assert!(!Message::FieldLeft.is_navigation());
        assert!(!Message::Quit.is_navigation());
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::Cancel.is_terminating());
    }

    #[test]
    fn message_pointer_detection() {
        assert!(Message::PressAt { column: 1, row: 1 }.is_pointer());
        assert!(Message::DragTo { column: 1, row: 1 }.is_pointer());
        assert!(Message::ReleaseAt { column: 1, row: 1 }.is_pointer());
        assert!(!Message::Submit.is_pointer());
        assert!(!Message::Input { ch: 'x' }.is_pointer());
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::NewCard).expect("serialize");
        assert_eq!(json, r#""new_card""#);

        let json = serde_json::to_string(&Message::Input { ch: 'x' }).expect("serialize");
        assert_eq!(json, r#"{"input":{"ch":"x"}}"#);
    }
}

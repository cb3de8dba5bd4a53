//! Card-related types for the Kanban board.
//!
//! This module defines the card identifier, the closed set of statuses a card
//! can be in, the validated [`CardDraft`] used by the add and edit flows, and
//! the [`Card`] record itself.
//!
//! Field names on the wire are fixed (`createdAt`, `updatedAt`, ...) so that
//! exported documents stay compatible across versions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// Unique identifier for a card.
///
/// Uses UUID v4 for globally unique identification.
pub type CardId = uuid::Uuid;

/// The column a card lives in.
///
/// The order of the variants is the left-to-right column order on the board.
///
/// # Examples
///
/// ```
/// use tracker_protocol::Status;
///
/// let status = Status::InProgress;
/// assert_eq!(status.display_name(), "In Progress");
/// assert_eq!(status.as_str(), "in-progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Cards waiting to be started.
    #[default]
    Backlog,
    /// Cards currently being worked on.
    InProgress,
    /// Completed cards.
    Done,
}

impl Status {
    /// Returns all statuses in column order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracker_protocol::Status;
    ///
    /// let all = Status::all();
    /// assert_eq!(all.len(), 3);
    /// assert_eq!(all[0], Status::Backlog);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Backlog, Self::InProgress, Self::Done]
    }

    /// Returns a human-readable column title.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the value used for this status in stored and exported documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Returns the column index of this status (0-2).
    ///
    /// # Examples
    ///
    /// ```
    /// use tracker_protocol::Status;
    ///
    /// assert_eq!(Status::Backlog.index(), 0);
    /// assert_eq!(Status::Done.index(), 2);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Backlog => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Creates a `Status` from its column index.
    ///
    /// Returns `None` if the index is out of range (>= 3).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Backlog),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the column to the right, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracker_protocol::Status;
    ///
    /// assert_eq!(Status::Backlog.next(), Some(Status::InProgress));
    /// assert_eq!(Status::Done.next(), None);
    /// ```
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the column to the left, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(idx) => Self::from_index(idx),
            None => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ProtocolError::UnknownStatus(s.to_string()))
    }
}

/// The user-editable fields of a card, already validated.
///
/// A draft can only be built through [`CardDraft::new`], which trims the title
/// and rejects it when nothing is left. The add and edit flows both produce a
/// draft, so a card can never end up with an empty title.
///
/// # Examples
///
/// ```
/// use tracker_protocol::{CardDraft, Status};
///
/// let draft = CardDraft::new("  Write changelog ")
///     .unwrap()
///     .with_project("release")
///     .with_status(Status::InProgress);
/// assert_eq!(draft.title(), "Write changelog");
///
/// assert!(CardDraft::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardDraft {
    title: String,
    description: String,
    project: String,
    deadline: Option<NaiveDate>,
    status: Status,
}

impl CardDraft {
    /// Creates a draft with the given title and default values elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EmptyTitle`] if the title is empty after trimming.
    pub fn new(title: impl AsRef<str>) -> Result<Self> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return Err(ProtocolError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
            ..Self::default()
        })
    }

    /// Builds a draft holding the current values of an existing card.
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            description: card.description.clone(),
            project: card.project.clone(),
            deadline: card.deadline,
            status: card.status,
        }
    }

    /// Sets the description (trimmed).
    #[must_use]
    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = description.as_ref().trim().to_string();
        self
    }

    /// Sets the project (trimmed). An empty project leaves the card untagged.
    #[must_use]
    pub fn with_project(mut self, project: impl AsRef<str>) -> Self {
        self.project = project.as_ref().trim().to_string();
        self
    }

    /// Sets or clears the deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the status the card will be placed in.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }
}

/// A card on the Kanban board.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use tracker_protocol::{Card, CardDraft, Status};
///
/// let now = Utc::now();
/// let card = Card::create(CardDraft::new("Fix login").unwrap(), now);
/// assert_eq!(card.status, Status::Backlog);
/// assert_eq!(card.created_at, card.updated_at);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,
    /// Short summary of the card.
    pub title: String,
    /// Longer free-form notes.
    #[serde(default)]
    pub description: String,
    /// Project label used for filtering; empty when untagged.
    #[serde(default)]
    pub project: String,
    /// Target calendar date, if any.
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    /// Column the card currently lives in.
    pub status: Status,
    /// When this card was created.
    pub created_at: DateTime<Utc>,
    /// When this card was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Creates a new card from a draft with a fresh identifier.
    ///
    /// Both timestamps are set to `now`.
    #[must_use]
    pub fn create(draft: CardDraft, now: DateTime<Utc>) -> Self {
        Self::with_id(CardId::new_v4(), draft, now)
    }

    /// Creates a new card with a specific ID.
    ///
    /// Useful for tests and fixtures that need stable identifiers.
    #[must_use]
    pub fn with_id(id: CardId, draft: CardDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            project: draft.project,
            deadline: draft.deadline,
            status: draft.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the editable fields with the draft and refreshes `updated_at`.
    pub fn apply_draft(&mut self, draft: CardDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.description = draft.description;
        self.project = draft.project;
        self.deadline = draft.deadline;
        self.status = draft.status;
        self.touch(now);
    }

    /// Moves the card to another column.
    ///
    /// Returns `false` and leaves the card untouched when it is already in
    /// `status`, so dropping a card onto its own column never bumps the
    /// timestamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use tracker_protocol::{Card, CardDraft, Status};
    ///
    /// let mut card = Card::create(CardDraft::new("Ship it").unwrap(), Utc::now());
    /// assert!(!card.move_to(Status::Backlog, Utc::now()));
    /// assert!(card.move_to(Status::Done, Utc::now()));
    /// assert_eq!(card.status, Status::Done);
    /// ```
    pub fn move_to(&mut self, status: Status, now: DateTime<Utc>) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.touch(now);
        true
    }

    /// Returns `true` if the card carries a project label.
    #[must_use]
    pub fn has_project(&self) -> bool {
        !self.project.is_empty()
    }

    // updated_at never goes below created_at, even if the clock steps back.
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 9, 30, 0).unwrap()
    }

    #[test]
    fn status_default_is_backlog() {
        assert_eq!(Status::default(), Status::Backlog);
    }

    #[test]
    fn status_json_format() {
        let json = serde_json::to_string(&Status::InProgress).expect("serialize");
        assert_eq!(json, r#""in-progress""#);

        let json = serde_json::to_string(&Status::Backlog).expect("serialize");
        assert_eq!(json, r#""backlog""#);
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!(serde_json::from_str::<Status>(r#""under-review""#).is_err());
        assert!("in_progress".parse::<Status>().is_err());
        assert_eq!("done".parse::<Status>().unwrap(), Status::Done);
    }

    #[test]
    fn status_neighbours() {
        assert_eq!(Status::InProgress.previous(), Some(Status::Backlog));
        assert_eq!(Status::Backlog.previous(), None);
        assert_eq!(Status::InProgress.next(), Some(Status::Done));
        assert_eq!(Status::from_index(3), None);
    }

    #[test]
    fn draft_trims_fields() {
        let draft = CardDraft::new("  Title  ")
            .unwrap()
            .with_description("  notes ")
            .with_project(" web ");

        assert_eq!(draft.title, "Title");
        assert_eq!(draft.description, "notes");
        assert_eq!(draft.project, "web");
        assert_eq!(draft.status, Status::Backlog);
    }

    #[test]
    fn draft_rejects_blank_title() {
        assert!(matches!(CardDraft::new(""), Err(ProtocolError::EmptyTitle)));
        assert!(matches!(
            CardDraft::new(" \t\n"),
            Err(ProtocolError::EmptyTitle)
        ));
    }

    #[test]
    fn create_sets_both_timestamps() {
        let card = Card::create(CardDraft::new("Task").unwrap(), fixed_time());

        assert_eq!(card.created_at, fixed_time());
        assert_eq!(card.updated_at, fixed_time());
        assert_eq!(card.description, "");
        assert!(!card.has_project());
        assert!(card.deadline.is_none());
    }

    #[test]
    fn apply_draft_overwrites_fields_and_keeps_identity() {
        let mut card = Card::create(CardDraft::new("Old").unwrap(), fixed_time());
        let id = card.id;
        let later = fixed_time() + Duration::hours(1);
        let deadline = NaiveDate::from_ymd_opt(2024, 2, 1);

        card.apply_draft(
            CardDraft::new("New")
                .unwrap()
                .with_project("ops")
                .with_deadline(deadline)
                .with_status(Status::Done),
            later,
        );

        assert_eq!(card.id, id);
        assert_eq!(card.title, "New");
        assert_eq!(card.project, "ops");
        assert_eq!(card.deadline, deadline);
        assert_eq!(card.status, Status::Done);
        assert_eq!(card.created_at, fixed_time());
        assert_eq!(card.updated_at, later);
    }

    #[test]
    fn move_to_same_status_keeps_timestamp() {
        let mut card = Card::create(CardDraft::new("Task").unwrap(), fixed_time());

        assert!(!card.move_to(Status::Backlog, fixed_time() + Duration::hours(2)));
        assert_eq!(card.updated_at, fixed_time());
    }

    #[test]
    fn updated_at_never_precedes_created_at() {
        let mut card = Card::create(CardDraft::new("Task").unwrap(), fixed_time());

        assert!(card.move_to(Status::Done, fixed_time() - Duration::days(1)));
        assert_eq!(card.updated_at, card.created_at);
    }

    #[test]
    fn card_json_uses_camel_case_fields() {
        let card = Card::create(CardDraft::new("Task").unwrap(), fixed_time());
        let value = serde_json::to_value(&card).expect("serialize");

        assert_eq!(value["createdAt"], "2024-01-10T09:30:00Z");
        assert_eq!(value["updatedAt"], "2024-01-10T09:30:00Z");
        assert_eq!(value["status"], "backlog");
        assert!(value["deadline"].is_null());
        assert_eq!(value.as_object().map(|o| o.len()), Some(8));
    }

    #[test]
    fn card_accepts_millisecond_timestamps_and_missing_optionals() {
        let json = r#"{
            "id": "0b6f4a52-8c4e-4a57-9d5d-2c5d6f0e1a11",
            "title": "From the browser",
            "status": "done",
            "createdAt": "2024-01-10T09:30:00.000Z",
            "updatedAt": "2024-01-11T10:00:00.000Z"
        }"#;

        let card: Card = serde_json::from_str(json).expect("deserialize");
        assert_eq!(card.status, Status::Done);
        assert_eq!(card.description, "");
        assert_eq!(card.project, "");
        assert_eq!(card.created_at, fixed_time());
    }
}

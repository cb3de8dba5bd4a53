//! Shared protocol types for the tracker application.
//!
//! This crate defines the core types used across all tracker components:
//! cards and their statuses, the board collection and the commands that
//! change it, filtered column views, deadline badges, and the export/import
//! document format.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`card`]: Card identifiers, statuses, drafts, and the `Card` struct
//! - [`board`]: The `Board` collection and command application
//! - [`command`]: The `Command` enum and its `Outcome`
//! - [`view`]: Project filters and per-column views
//! - [`deadline`]: Deadline urgency and badge labels
//! - [`transfer`]: Export document and import parsing
//! - [`message`]: TUI event messages
//! - [`sample`]: Demo data
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use tracker_protocol::{Board, BoardView, CardDraft, Command, ProjectFilter, Status};
//!
//! let mut board = Board::new();
//! let draft = CardDraft::new("Implement feature").unwrap().with_project("core");
//! let _ = board.apply(Command::Create(draft), Utc::now());
//!
//! let id = board.cards()[0].id;
//! let _ = board.apply(Command::Move { id, status: Status::InProgress }, Utc::now());
//!
//! let view = BoardView::derive(&board, &ProjectFilter::project("core"));
//! assert_eq!(view.column(Status::InProgress).count(), 1);
//! ```

pub mod board;
pub mod card;
pub mod command;
pub mod deadline;
pub mod error;
pub mod message;
pub mod sample;
pub mod transfer;
pub mod view;

// Re-export primary types at crate root for convenience
pub use board::Board;
pub use card::{Card, CardDraft, CardId, Status};
pub use command::{Command, Outcome};
pub use deadline::{DeadlineBadge, DeadlineUrgency, days_until, deadline_label};
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use transfer::{
    INVALID_IMPORT_NOTICE, ImportError, export_document, export_file_name, import_prompt,
    parse_import,
};
pub use view::{
    ALL_PROJECTS, BoardView, ColumnView, ProjectFilter, filter_options, project_names,
    project_suggestions,
};

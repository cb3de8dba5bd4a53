//! Terminal UI for the tracker application.
//!
//! This crate provides a Ratatui-based terminal interface for the kanban
//! board: three status columns, an add/edit card form, drag-and-drop with
//! the mouse, a project filter, and JSON export/import.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct, message dispatch, and run loop
//! - [`state`]: Column and card selection
//! - [`form`]: Card form and text input state
//! - [`layout`]: Screen regions shared by rendering and hit-testing
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event polling and per-mode key mappings
//! - [`widgets`]: Rendering functions
//!
//! # Example
//!
//! ```no_run
//! use tracker_store::{CardRepository, DirectoryFileSave, MemoryBlobStore};
//! use tracker_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let repository = CardRepository::load(MemoryBlobStore::new());
//!     let mut app = App::new(repository, DirectoryFileSave::new("."));
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod form;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::{App, PendingConfirmation};
pub use event::InputMode;
pub use state::AppState;

//! Widget components for the tracker TUI.
//!
//! This module provides rendering functions for the board UI, organized
//! into focused submodules for each visual component.
//!
//! # Overview
//!
//! Each widget is a plain function that renders state into a buffer, which
//! keeps them easy to test and compose.
//!
//! # Modules
//!
//! - [`board`]: The three columns side by side
//! - [`lane`]: A single column and its card list, plus hit-testing
//! - [`card`]: Cards with project tag and deadline badge
//! - [`form`]: The add/edit card modal
//! - [`dialog`]: Confirmation dialog and import prompt
//! - [`help`]: The keybinding overlay
//! - [`status_bar`]: Footer with key hints or the current notice
//!
//! # Color Coding
//!
//! Card borders follow the column, deadline badges follow the urgency:
//!
//! | Column / urgency | Color |
//! |------------------|-------|
//! | Backlog | `Color::DarkGray` |
//! | In Progress | `Color::Blue` |
//! | Done | `Color::Green` |
//! | Overdue | `Color::Red` |
//! | Due within three days | `Color::Yellow` |
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, Utc};
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use tracker_protocol::{Board, BoardView, CardDraft, Command, ProjectFilter};
//! use tracker_tui::widgets;
//!
//! let mut board = Board::new();
//! let _ = board.apply(Command::Create(CardDraft::new("Example").unwrap()), Utc::now());
//! let view = BoardView::derive(&board, &ProjectFilter::All);
//! let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//!
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(&view, widgets::BoardHighlight::default(), today, area, &mut buf);
//! ```

pub mod board;
pub mod card;
pub mod dialog;
pub mod form;
pub mod help;
pub mod lane;
pub mod status_bar;

// Re-export primary rendering functions for convenience
pub use board::{BoardHighlight, render_board};
pub use card::{render_card, status_color, urgency_color};
pub use dialog::{render_confirm_dialog, render_import_prompt};
pub use form::render_card_form;
pub use help::render_help_overlay;
pub use lane::{LanePosition, LaneStyle, card_at, render_lane};
pub use status_bar::{Notice, NoticeLevel, render_status_bar};

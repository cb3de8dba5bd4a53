//! Sample data for demonstration.
//!
//! `tracker --demo` runs against an in-memory store seeded with
//! [`sample_board`], so the UI can be tried without touching real data.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use tracker_protocol::sample::sample_board;
//!
//! let board = sample_board(Utc::now());
//! assert_eq!(board.len(), 7);
//! ```

use chrono::{DateTime, Duration, Utc};

use crate::board::Board;
use crate::card::{Card, CardDraft, Status};

struct Sample {
    title: &'static str,
    description: &'static str,
    project: &'static str,
    due_in_days: Option<i64>,
    status: Status,
}

const SAMPLES: &[Sample] = &[
    Sample {
        title: "Sketch landing page",
        description: "Hero, pricing table and signup form",
        project: "Website",
        due_in_days: Some(5),
        status: Status::Backlog,
    },
    Sample {
        title: "Collect testimonials",
        description: "",
        project: "Website",
        due_in_days: None,
        status: Status::Backlog,
    },
    Sample {
        title: "Renew TLS certificate",
        description: "Expires at the end of the week",
        project: "ops",
        due_in_days: Some(-1),
        status: Status::Backlog,
    },
    Sample {
        title: "Migrate backups",
        description: "Move nightly dumps to the new bucket",
        project: "ops",
        due_in_days: Some(0),
        status: Status::InProgress,
    },
    Sample {
        title: "Write release notes",
        description: "",
        project: "",
        due_in_days: Some(14),
        status: Status::InProgress,
    },
    Sample {
        title: "Set up analytics",
        description: "Self-hosted, no cookies",
        project: "Website",
        due_in_days: None,
        status: Status::Done,
    },
    Sample {
        title: "Rotate API keys",
        description: "",
        project: "ops",
        due_in_days: None,
        status: Status::Done,
    },
];

/// Builds a board with a handful of cards spread over every column, with
/// deadlines relative to `now` so every badge colour shows up.
#[must_use]
pub fn sample_board(now: DateTime<Utc>) -> Board {
    let today = now.date_naive();
    let cards = SAMPLES
        .iter()
        .filter_map(|s| {
            let draft = CardDraft::new(s.title)
                .ok()?
                .with_description(s.description)
                .with_project(s.project)
                .with_deadline(s.due_in_days.map(|d| today + Duration::days(d)))
                .with_status(s.status);
            Some(Card::create(draft, now))
        })
        .collect();
    Board::from_cards(cards)
}

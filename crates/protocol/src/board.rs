//! The card collection.
//!
//! [`Board`] owns every card in insertion order. Columns are not stored
//! separately: a column is the subsequence of cards with a given status, so
//! display order within a column is always collection order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId, Status};
use crate::command::{Command, Outcome};

/// The full card collection.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use tracker_protocol::{Board, CardDraft, Command, Status};
///
/// let mut board = Board::new();
/// let outcome = board.apply(Command::Create(CardDraft::new("Plan sprint").unwrap()), Utc::now());
/// assert!(outcome.is_changed());
///
/// let id = board.cards()[0].id;
/// let _ = board.apply(Command::Move { id, status: Status::InProgress }, Utc::now());
/// assert_eq!(board.count(Status::InProgress), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board holding the given cards, in order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns all cards in collection order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the board and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the board holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Finds a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Iterates over the cards in one column, in collection order.
    pub fn column(&self, status: Status) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.status == status)
    }

    /// Returns the number of cards in one column, ignoring any filter.
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.column(status).count()
    }

    /// Applies a command to the collection.
    ///
    /// Unknown ids and moves onto the card's own column are silent no-ops and
    /// report [`Outcome::Unchanged`].
    pub fn apply(&mut self, command: Command, now: DateTime<Utc>) -> Outcome {
        match command {
            Command::Create(draft) => {
                self.cards.push(Card::create(draft, now));
                Outcome::Changed
            }
            Command::Update { id, draft } => match self.get_mut(id) {
                Some(card) => {
                    card.apply_draft(draft, now);
                    Outcome::Changed
                }
                None => Outcome::Unchanged,
            },
            Command::Delete { id } => {
                let before = self.cards.len();
                self.cards.retain(|c| c.id != id);
                Outcome::from(self.cards.len() < before)
            }
            Command::Move { id, status } => self
                .get_mut(id)
                .is_some_and(|card| card.move_to(status, now))
                .into(),
            Command::Replace(cards) => {
                self.cards = cards;
                Outcome::Changed
            }
        }
    }

    /// By-value form of [`Board::apply`]: `(collection, command) -> collection'`.
    #[must_use]
    pub fn transition(mut self, command: Command, now: DateTime<Utc>) -> Self {
        let _ = self.apply(command, now);
        self
    }
}

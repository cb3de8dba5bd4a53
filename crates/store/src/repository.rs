//! The card repository: the board plus the store it is persisted in.
//!
//! Every change to the collection goes through [`CardRepository::dispatch`],
//! which applies a [`Command`] and writes the whole collection back when the
//! command changed something. Reading never fails: a missing, unreadable, or
//! corrupt blob yields an empty board.

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};
use tracker_protocol::{Board, Command, Outcome};

use crate::blob::BlobStore;
use crate::error::{Result, StoreError};

/// The key the card collection is stored under.
pub const STORAGE_KEY: &str = "project-tracker-cards";

/// Owns the in-memory [`Board`] and the [`BlobStore`] backing it.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use tracker_protocol::{CardDraft, Command};
/// use tracker_store::{CardRepository, MemoryBlobStore};
///
/// let mut repo = CardRepository::load(MemoryBlobStore::new());
/// assert!(repo.board().is_empty());
///
/// let draft = CardDraft::new("Ship it").unwrap();
/// let outcome = repo.dispatch(Command::Create(draft), Utc::now()).unwrap();
/// assert!(outcome.is_changed());
///
/// // A fresh repository over the same store sees the saved card.
/// let repo = CardRepository::load(repo.into_store());
/// assert_eq!(repo.board().len(), 1);
/// ```
#[derive(Debug)]
pub struct CardRepository<S> {
    board: Board,
    store: S,
}

impl<S: BlobStore> CardRepository<S> {
    /// Loads the collection from `store`.
    ///
    /// Failures are logged and produce an empty board.
    #[instrument(skip(store))]
    pub fn load(store: S) -> Self {
        let board = match store.get(STORAGE_KEY) {
            Ok(Some(text)) => match serde_json::from_str::<Board>(&text) {
                Ok(board) => {
                    info!(cards = board.len(), "loaded cards");
                    board
                }
                Err(e) => {
                    warn!(error = %e, "stored cards are corrupt, starting empty");
                    Board::new()
                }
            },
            Ok(None) => {
                debug!("no stored cards, starting empty");
                Board::new()
            }
            Err(e) => {
                warn!(error = %e, "failed to read stored cards, starting empty");
                Board::new()
            }
        };
        Self { board, store }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the repository and returns its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Writes the whole collection to the store, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be serialized or written.
    #[instrument(skip(self), fields(cards = self.board.len()))]
    pub fn save(&mut self) -> Result<()> {
        let text = serde_json::to_string(&self.board).map_err(StoreError::Serialize)?;
        self.store.set(STORAGE_KEY, &text)?;
        debug!("saved cards");
        Ok(())
    }

    /// Applies `command` and persists the result if anything changed.
    ///
    /// The in-memory board keeps the change even when saving fails; the
    /// error is returned so the caller can report it.
    ///
    /// # Errors
    ///
    /// Returns an error if the changed collection cannot be saved.
    #[instrument(skip(self, command), fields(command = command.name()))]
    pub fn dispatch(&mut self, command: Command, now: DateTime<Utc>) -> Result<Outcome> {
        let outcome = self.board.apply(command, now);
        if outcome.is_changed() {
            self.save()?;
        } else {
            debug!("command left the board unchanged");
        }
        Ok(outcome)
    }
}

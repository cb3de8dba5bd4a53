//! tracker - a single-user kanban project tracker for the terminal.
//!
//! This is the main binary: it reads configuration, starts file logging,
//! opens the card store, and runs the board until the user quits.

mod cli;
mod logging;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracker_config::Config;
use tracker_protocol::sample::sample_board;
use tracker_store::{
    BlobStore, CardRepository, DirectoryFileSave, FileBlobStore, MemoryBlobStore, STORAGE_KEY,
};
use tracker_tui::{App, terminal};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    let _log_guard = match config.resolved_log_dir() {
        Ok(dir) => logging::init(&config.logging, &dir),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e}");
            None
        }
    };

    let saver = DirectoryFileSave::new(config.resolved_export_dir());

    if cli.demo {
        info!("starting with sample board");
        let sample = serde_json::to_string(&sample_board(Utc::now()))
            .context("failed to build sample board")?;
        let store = MemoryBlobStore::with_blob(STORAGE_KEY, sample);
        run(CardRepository::load(store), saver).await
    } else {
        let data_dir = config.resolved_data_dir()?;
        info!(data_dir = %data_dir.display(), "opening card store");
        let store = FileBlobStore::with_path(data_dir).context("failed to open card store")?;
        run(CardRepository::load(store), saver).await
    }
}

async fn run<S: BlobStore>(
    repository: CardRepository<S>,
    saver: DirectoryFileSave,
) -> anyhow::Result<()> {
    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(repository, saver);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    info!("exiting");
    result
}

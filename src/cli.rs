//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tracker")]
#[command(version, about = "A single-user kanban project tracker for the terminal")]
pub struct Cli {
    /// Read configuration from this file instead of searching for one
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start on an in-memory sample board; nothing is written to disk
    #[arg(long)]
    pub demo: bool,
}

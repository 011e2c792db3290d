//! Command-line interface for the score keeper.

use std::path::PathBuf;

use clap::Parser;

/// Score keeper for three-player mahjong
#[derive(Parser, Debug)]
#[command(name = "sanma_score")]
#[command(about = "Score keeper for three-player mahjong", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the saved-game file (created on first settlement)
    #[arg(long, default_value = "sanma_score.json")]
    pub data_file: PathBuf,

    /// Discard any saved game and start fresh
    #[arg(long)]
    pub fresh: bool,
}

//! HEXCARDS CLI - Command-line interface
//!
//! Commands:
//! - board: Render a hex board as SVG (and optionally PNG / print page)
//! - card: Render a single move card
//! - batch: Parse a file of card lines and render every card

mod batch_cmd;
mod board_cmd;
mod card_cmd;
mod output;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexcards")]
#[command(about = "Hex board and move card renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a hex board
    Board(board_cmd::BoardArgs),
    /// Render a single move card
    Card(card_cmd::CardArgs),
    /// Parse card lines from a file and render every card
    Batch(batch_cmd::BatchArgs),
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Board(args) => board_cmd::run(args),
        Commands::Card(args) => card_cmd::run(args),
        Commands::Batch(args) => batch_cmd::run(args),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

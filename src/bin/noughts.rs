//! noughts CLI - Tic-tac-toe against an exhaustive minimax AI
//!
//! This CLI provides:
//! - Interactive games against the AI, with a human or random opponent
//! - Position analysis showing the AI's move scores
//! - A list of preset starting boards

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe against an exhaustive minimax AI", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the AI
    Play(noughts::cli::commands::play::PlayArgs),

    /// Analyze a position the way the AI sees it
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),

    /// List preset starting boards
    Scenarios,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    noughts::cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
        Commands::Scenarios => noughts::cli::commands::scenarios::execute(),
    }
}

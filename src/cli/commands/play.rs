//! Play command - Play a game against the minimax AI

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::{App, GameConfig, OpponentKind},
    cli::output::{format_board_with_indices, print_kv, print_section},
    evaluator::{DiagonalScoring, EvaluatorKind},
    session::FirstMover,
    tictactoe::Scenario,
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play a game against the minimax AI")]
pub struct PlayArgs {
    /// JSON configuration file; flags override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Evaluation strategy of the AI
    #[arg(long, short = 'e', value_enum)]
    pub evaluator: Option<EvaluatorKind>,

    /// Diagonal handling of the heuristic evaluator
    #[arg(long, value_enum)]
    pub diagonal_scoring: Option<DiagonalScoring>,

    /// Opponent playing O
    #[arg(long, short = 'o', value_enum)]
    pub opponent: Option<OpponentKind>,

    /// Side that opens the game
    #[arg(long, value_enum)]
    pub first: Option<FirstMover>,

    /// Preset starting board
    #[arg(long, short = 's', value_enum)]
    pub scenario: Option<Scenario>,

    /// Starting board as 9 cells, e.g. "X-XO--O--"
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Random seed for the random opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the finished game as JSON
    #[arg(long)]
    pub record: Option<PathBuf>,
}

impl PlayArgs {
    /// Merge the optional config file with the command-line flags
    pub fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(evaluator) = self.evaluator {
            config.evaluator = evaluator;
        }
        if let Some(scoring) = self.diagonal_scoring {
            config.diagonal_scoring = scoring;
        }
        if let Some(opponent) = self.opponent {
            config.opponent = opponent;
        }
        if let Some(first) = self.first {
            config.first = first;
        }
        if let Some(scenario) = self.scenario {
            config.scenario = scenario;
            config.board = None;
        }
        if let Some(board) = &self.board {
            config.board = Some(board.clone());
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(record) = &self.record {
            config.record = Some(record.clone());
        }

        config.initial_board().context("invalid starting board")?;
        Ok(config)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let board = config.initial_board()?;

    print_section("noughts");
    print_kv("Evaluator", &format!("{:?}", config.evaluator));
    if config.evaluator == EvaluatorKind::Heuristic {
        print_kv("Diagonal scoring", &format!("{:?}", config.diagonal_scoring));
    }
    print_kv("Opponent", &format!("{:?}", config.opponent));
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }
    if config.opponent == OpponentKind::Human {
        println!("\nYou play O. Cells are numbered:");
        println!("{}\n", format_board_with_indices(&board));
    } else {
        println!();
    }

    let mut app = App::new();
    let game = app.play(&config)?;

    if let Some(path) = &config.record {
        println!("\n✓ Game recorded to: {}", path.display());
    }
    tracing::debug!(moves = game.moves.len(), "play finished");

    Ok(())
}

//! Configuration for a game session.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    evaluator::{DiagonalScoring, EvaluatorKind},
    session::FirstMover,
    tictactoe::{Board, Scenario},
};

/// Who plays O against the AI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OpponentKind {
    /// Moves typed on the console
    #[default]
    Human,
    /// Uniform choice among empty cells
    Random,
}

/// Configuration for one game.
///
/// Every field has a default, so a JSON file only needs the fields it
/// changes. Builder methods mirror the fields.
///
/// # Examples
///
/// ```
/// use noughts::app::{GameConfig, OpponentKind};
/// use noughts::evaluator::EvaluatorKind;
/// use noughts::tictactoe::Scenario;
///
/// let config = GameConfig::new()
///     .with_evaluator(EvaluatorKind::Heuristic)
///     .with_opponent(OpponentKind::Random)
///     .with_scenario(Scenario::AiBlock)
///     .with_seed(42);
/// assert_eq!(config.initial_board()?.occupied_count(), 3);
/// # Ok::<(), noughts::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Evaluation strategy of the AI
    pub evaluator: EvaluatorKind,
    /// Diagonal handling of the heuristic evaluator
    pub diagonal_scoring: DiagonalScoring,
    /// Opponent playing O
    pub opponent: OpponentKind,
    /// Side that opens the game
    pub first: FirstMover,
    /// Preset starting board
    pub scenario: Scenario,
    /// Explicit starting board, overrides `scenario`
    pub board: Option<String>,
    /// Random seed for the random opponent
    pub seed: Option<u64>,
    /// File receiving the JSON game record
    pub record: Option<PathBuf>,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_diagonal_scoring(mut self, scoring: DiagonalScoring) -> Self {
        self.diagonal_scoring = scoring;
        self
    }

    pub fn with_opponent(mut self, opponent: OpponentKind) -> Self {
        self.opponent = opponent;
        self
    }

    pub fn with_first(mut self, first: FirstMover) -> Self {
        self.first = first;
        self
    }

    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn with_board(mut self, board: impl Into<String>) -> Self {
        self.board = Some(board.into());
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_record(mut self, path: impl Into<PathBuf>) -> Self {
        self.record = Some(path.into());
        self
    }

    /// Starting board: the explicit board string if set, else the scenario.
    ///
    /// # Errors
    ///
    /// Returns the parse error of an invalid board string.
    pub fn initial_board(&self) -> Result<Board> {
        match &self.board {
            Some(board) => Board::from_string(board),
            None => Ok(self.scenario.board()),
        }
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config '{}'", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_reader(file)?;
        config.initial_board().map_err(|e| crate::Error::InvalidConfiguration {
            message: format!("{}: {e}", path.display()),
        })?;
        Ok(config)
    }

    /// Save the configuration as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create config '{}'", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

//! Board evaluation
//!
//! Two strategies share one seam:
//! - [`TerminalEvaluator`] only recognizes finished games (+1 / -1 / 0)
//! - [`HeuristicEvaluator`] scores line patterns and stops the search early

pub mod heuristic;
pub mod terminal;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use heuristic::{DiagonalScoring, HeuristicBreakdown, HeuristicEvaluator};
pub use terminal::{Evaluation, TerminalEvaluator};

use crate::tictactoe::{Board, GameOutcome};

/// Search value, always from X's perspective
pub type Score = i32;

/// Evaluation strategy driving the minimax search and the turn loop
pub trait Evaluator {
    /// Value at which the search stops descending, or `None` to keep searching.
    fn cutoff(&self, board: &Board) -> Option<Score>;

    /// Outcome of a finished game, or `None` while play continues.
    fn classify(&self, board: &Board) -> Option<GameOutcome>;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn cutoff(&self, board: &Board) -> Option<Score> {
        (**self).cutoff(board)
    }

    fn classify(&self, board: &Board) -> Option<GameOutcome> {
        (**self).classify(board)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Selectable evaluator variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluatorKind {
    /// Full-depth search over finished games only
    #[default]
    Terminal,
    /// Line-pattern heuristic with early cutoff
    Heuristic,
}

//! Terminal-state evaluator

use serde::{Deserialize, Serialize};

use super::{Evaluator, Score};
use crate::tictactoe::{Board, GameOutcome, LineAnalyzer};

/// Result of checking a board for a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    Decisive(GameOutcome),
    Undecided,
}

impl Evaluation {
    /// Numeric value of a decisive result
    pub fn value(self) -> Option<Score> {
        match self {
            Evaluation::Decisive(outcome) => Some(outcome.value()),
            Evaluation::Undecided => None,
        }
    }

    pub fn is_decisive(self) -> bool {
        matches!(self, Evaluation::Decisive(_))
    }
}

/// Recognizes wins and draws; everything else is undecided.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalEvaluator;

impl TerminalEvaluator {
    /// Check the 8 lines in scan order (rows, columns, diagonals); the first
    /// completed line decides. A full board without one is a draw.
    pub fn evaluate(&self, board: &Board) -> Evaluation {
        if let Some((player, _)) = LineAnalyzer::first_completed_line(&board.cells) {
            return Evaluation::Decisive(GameOutcome::Win(player));
        }
        if board.is_full() {
            Evaluation::Decisive(GameOutcome::Draw)
        } else {
            Evaluation::Undecided
        }
    }
}

impl Evaluator for TerminalEvaluator {
    fn cutoff(&self, board: &Board) -> Option<Score> {
        self.evaluate(board).value()
    }

    fn classify(&self, board: &Board) -> Option<GameOutcome> {
        match self.evaluate(board) {
            Evaluation::Decisive(outcome) => Some(outcome),
            Evaluation::Undecided => None,
        }
    }

    fn name(&self) -> &'static str {
        "terminal"
    }
}

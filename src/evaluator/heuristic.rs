//! Line-pattern heuristic evaluator
//!
//! Every line contributes at most one term: ±100 for a completed line, ±10
//! for two marks and an empty cell. A second sweep over the diagonals then
//! adds ±100 for the first completed diagonal it finds, so a completed
//! diagonal counts twice. [`DiagonalScoring::Single`] turns that sweep off.
//!
//! Zero means both "nothing on the board" and "balanced"; the search treats
//! any non-zero score as a cutoff.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{Evaluator, Score};
use crate::tictactoe::{Board, DIAGONALS, GameOutcome, LineAnalyzer, Player, WINNING_LINES};

/// Score of a completed line
pub const LINE_WIN: Score = 100;

/// Score of two marks plus an empty cell on one line
pub const OPEN_PAIR: Score = 10;

/// Whether completed diagonals get the extra sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DiagonalScoring {
    /// Add the diagonal bonus on top of the line sweep
    #[default]
    DoubleCount,
    /// Score diagonals once, like any other line
    Single,
}

/// Per-term tally behind a heuristic score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HeuristicBreakdown {
    pub completed_x: usize,
    pub completed_o: usize,
    pub open_pairs_x: usize,
    pub open_pairs_o: usize,
    pub diagonal_bonus: Score,
}

impl HeuristicBreakdown {
    pub fn score(&self) -> Score {
        let completed = self.completed_x as Score - self.completed_o as Score;
        let pairs = self.open_pairs_x as Score - self.open_pairs_o as Score;
        completed * LINE_WIN + pairs * OPEN_PAIR + self.diagonal_bonus
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator {
    diagonals: DiagonalScoring,
}

impl HeuristicEvaluator {
    pub fn new(diagonals: DiagonalScoring) -> Self {
        Self { diagonals }
    }

    pub fn diagonal_scoring(&self) -> DiagonalScoring {
        self.diagonals
    }

    pub fn breakdown(&self, board: &Board) -> HeuristicBreakdown {
        let mut tally = HeuristicBreakdown::default();

        for line in &WINNING_LINES {
            let count = LineAnalyzer::count(&board.cells, line);
            match (count.completed_by(), count.open_pair()) {
                (Some(Player::X), _) => tally.completed_x += 1,
                (Some(Player::O), _) => tally.completed_o += 1,
                (None, Some(Player::X)) => tally.open_pairs_x += 1,
                (None, Some(Player::O)) => tally.open_pairs_o += 1,
                (None, None) => {}
            }
        }

        if self.diagonals == DiagonalScoring::DoubleCount {
            tally.diagonal_bonus = Self::diagonal_bonus(board);
        }

        tally
    }

    pub fn evaluate(&self, board: &Board) -> Score {
        self.breakdown(board).score()
    }

    // Main diagonal before anti-diagonal, X before O; only the first hit counts.
    fn diagonal_bonus(board: &Board) -> Score {
        for line in &DIAGONALS {
            match LineAnalyzer::count(&board.cells, line).completed_by() {
                Some(Player::X) => return LINE_WIN,
                Some(Player::O) => return -LINE_WIN,
                None => {}
            }
        }
        0
    }
}

impl Evaluator for HeuristicEvaluator {
    fn cutoff(&self, board: &Board) -> Option<Score> {
        let score = self.evaluate(board);
        (score != 0).then_some(score)
    }

    fn classify(&self, board: &Board) -> Option<GameOutcome> {
        let tally = self.breakdown(board);
        if tally.completed_x > 0 {
            Some(GameOutcome::Win(Player::X))
        } else if tally.completed_o > 0 {
            Some(GameOutcome::Win(Player::O))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn empty_board_scores_zero() {
        let evaluator = HeuristicEvaluator::default();
        assert_eq!(evaluator.evaluate(&Board::new()), 0);
        assert_eq!(evaluator.cutoff(&Board::new()), None);
    }

    #[test]
    fn open_pairs_score_ten() {
        let evaluator = HeuristicEvaluator::default();
        assert_eq!(evaluator.evaluate(&board("XX-------")), 10);
        assert_eq!(evaluator.evaluate(&board("OO-------")), -10);
        // Blocked pair scores nothing
        assert_eq!(evaluator.evaluate(&board("XXO------")), 0);
    }

    #[test]
    fn completed_row_scores_once() {
        let evaluator = HeuristicEvaluator::default();
        assert_eq!(evaluator.evaluate(&board("XXX------")), 100);
        assert_eq!(evaluator.evaluate(&board("---OOO---")), -100);
    }

    #[test]
    fn completed_diagonal_is_double_counted() {
        let double = HeuristicEvaluator::new(DiagonalScoring::DoubleCount);
        let single = HeuristicEvaluator::new(DiagonalScoring::Single);
        let diagonal = board("X---X---X");

        assert_eq!(double.evaluate(&diagonal), 200);
        assert_eq!(single.evaluate(&diagonal), 100);
        assert_eq!(double.breakdown(&diagonal).diagonal_bonus, 100);
    }

    #[test]
    fn diagonal_bonus_applies_once_for_both_diagonals() {
        // X - X
        // - X -
        // X - X
        let evaluator = HeuristicEvaluator::default();
        let tally = evaluator.breakdown(&board("X-X-X-X-X"));
        assert_eq!(tally.completed_x, 2);
        assert_eq!(tally.diagonal_bonus, 100);
        // Both diagonals plus four open pairs on the edge rows and columns
        assert_eq!(tally.open_pairs_x, 4);
        assert_eq!(evaluator.evaluate(&board("X-X-X-X-X")), 340);
    }

    #[test]
    fn classify_uses_completed_lines() {
        let evaluator = HeuristicEvaluator::default();
        // X has the top row; O has two open pairs that drag the score under 100
        let won = board("XXXOO-OO-");
        assert!(evaluator.evaluate(&won) < LINE_WIN);
        assert_eq!(evaluator.classify(&won), Some(GameOutcome::Win(Player::X)));

        assert_eq!(
            evaluator.classify(&board("XOXXOOOXX")),
            Some(GameOutcome::Draw)
        );
        assert_eq!(evaluator.classify(&board("XO-------")), None);
    }
}

//! Exhaustive minimax search and best-move selection
//!
//! X is always the maximizing side. The search mutates the caller's board
//! in place through [`Board::place_scoped`]; every placement is undone when
//! its guard drops, so the board is unchanged once a call returns.

use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::{
    evaluator::{Evaluator, Score},
    tictactoe::{Board, Player},
};

/// Best cell for X and the search value it produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub cell: usize,
    pub score: Score,
}

/// Root-level view of one move selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Value of placing X on each empty cell, in index order
    pub moves: Vec<(usize, Score)>,
    pub best: Option<SearchResult>,
    /// Positions visited below the root
    pub nodes: u64,
}

/// Minimax search driven by an [`Evaluator`]
#[derive(Debug, Clone, Default)]
pub struct Minimax<E> {
    evaluator: E,
}

impl<E: Evaluator> Minimax<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Value of `board` with X to move when `maximizing`, O otherwise.
    pub fn minimax(&self, board: &mut Board, maximizing: bool) -> Score {
        let mut nodes = 0;
        let score = self.search(board, maximizing, &mut nodes);
        debug!(nodes, score, maximizing, "minimax finished");
        score
    }

    fn search(&self, board: &mut Board, maximizing: bool, nodes: &mut u64) -> Score {
        *nodes += 1;

        if let Some(score) = self.evaluator.cutoff(board) {
            return score;
        }

        let (mover, mut best) = if maximizing {
            (Player::X, Score::MIN)
        } else {
            (Player::O, Score::MAX)
        };

        let empty = board.empty_positions();
        if empty.is_empty() {
            // Full board and no cutoff: nothing left to decide
            return 0;
        }

        for pos in empty {
            let mut placed = board.place_scoped(pos, mover);
            let score = self.search(&mut placed, !maximizing, nodes);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    /// Score every empty cell for X and pick the first strictly best one.
    pub fn analyze(&self, board: &mut Board) -> SearchReport {
        let _span = info_span!("analyze", evaluator = self.evaluator.name()).entered();

        let mut nodes = 0;
        let mut moves = Vec::new();
        let mut best: Option<SearchResult> = None;

        for cell in board.empty_positions() {
            let score = {
                let mut placed = board.place_scoped(cell, Player::X);
                self.search(&mut placed, false, &mut nodes)
            };
            debug!(cell, score, "root move scored");
            moves.push((cell, score));

            if best.is_none_or(|current| score > current.score) {
                best = Some(SearchResult { cell, score });
            }
        }

        match best {
            Some(result) => info!(cell = result.cell, score = result.score, nodes, "best move"),
            None => debug!("no empty cell to search"),
        }

        SearchReport { moves, best, nodes }
    }

    /// Value of placing X on each empty cell, in index order
    pub fn evaluate_moves(&self, board: &mut Board) -> Vec<(usize, Score)> {
        self.analyze(board).moves
    }

    /// Best cell for X with its value, or `None` on a full board
    pub fn best_move(&self, board: &mut Board) -> Option<SearchResult> {
        self.analyze(board).best
    }

    /// Best cell for X, or `None` on a full board. Ties go to the lowest index.
    pub fn find_best_move(&self, board: &mut Board) -> Option<usize> {
        self.best_move(board).map(|result| result.cell)
    }
}

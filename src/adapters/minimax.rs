//! Search-backed opponent (the AI)

use crate::{
    Result,
    evaluator::Evaluator,
    ports::Opponent,
    search::Minimax,
    tictactoe::Board,
};

/// Plays X by exhaustive minimax search
pub struct MinimaxOpponent<E> {
    search: Minimax<E>,
}

impl<E: Evaluator> MinimaxOpponent<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            search: Minimax::new(evaluator),
        }
    }

    pub fn search(&self) -> &Minimax<E> {
        &self.search
    }

    pub fn evaluator(&self) -> &E {
        self.search.evaluator()
    }
}

impl<E: Evaluator> Opponent for MinimaxOpponent<E> {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        let mut scratch = *board;
        self.search
            .find_best_move(&mut scratch)
            .ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "AI"
    }
}

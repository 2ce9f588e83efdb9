//! Uniform random opponent

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{Result, ports::Opponent, tictactoe::Board};

/// Picks uniformly among the empty cells
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Create a random opponent seeded from the thread RNG
    pub fn new() -> Self {
        Self::with_seed(random())
    }

    /// Create a random opponent with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        let moves = board.empty_positions();
        if moves.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        "Random Generator"
    }
}

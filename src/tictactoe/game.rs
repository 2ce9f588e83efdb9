//! High-level game record

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Numeric value from X's perspective: +1 X wins, -1 O wins, 0 draw
    pub fn value(self) -> i32 {
        match self {
            GameOutcome::Win(Player::X) => 1,
            GameOutcome::Win(Player::O) => -1,
            GameOutcome::Draw => 0,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "Player {player} wins!"),
            GameOutcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// A complete game with history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from an initial position
    pub fn new(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Record a move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`](crate::Error::GameOver) once an outcome is
    /// set, or a placement error if the move is illegal on the current board.
    pub fn play(&mut self, position: usize, player: Player) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let mut board = self.current_board()?;
        board.place(position, player)?;
        self.moves.push(Move { position, player });
        Ok(())
    }

    /// Close the game with its outcome
    pub fn finish(&mut self, outcome: GameOutcome) {
        self.outcome = Some(outcome);
    }

    /// Get the current board by replaying the recorded moves
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the board it
    /// is applied to. This indicates corrupted game data.
    pub fn current_board(&self) -> Result<Board, crate::Error> {
        let mut board = self.initial;
        for m in &self.moves {
            board.place(m.position, m.player)?;
        }
        Ok(board)
    }

    /// Save the game record to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), crate::Error> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create game record '{}'", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a game record from a JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open game record '{}'", path.display()),
            source,
        })?;
        Ok(serde_json::from_reader(file)?)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Board::new())
    }
}

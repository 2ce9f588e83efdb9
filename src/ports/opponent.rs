//! Opponent port - abstraction over whoever places the next mark
//!
//! The turn loop asks an [`Opponent`] for a cell and applies it itself, so
//! implementations only read the board:
//! - Console input (human player)
//! - Uniform random choice among empty cells
//! - Minimax search (the AI)

use crate::{Result, tictactoe::Board};

/// Source of moves for one side of a game
///
/// # Examples
///
/// ```
/// use noughts::{
///     adapters::RandomOpponent,
///     ports::Opponent,
///     tictactoe::Board,
/// };
///
/// let mut opponent = RandomOpponent::with_seed(7);
/// let board = Board::from_string("XOXOXOXO-")?;
/// assert_eq!(opponent.select_move(&board)?, 8);
/// # Ok::<(), noughts::Error>(())
/// ```
pub trait Opponent {
    /// Select an empty cell (0-8) on the given board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) on a full
    /// board, or an I/O error for interactive sources.
    fn select_move(&mut self, board: &Board) -> Result<usize>;

    /// Name shown when the move is announced.
    fn name(&self) -> &str;

    /// Whether the turn loop prints the chosen cell.
    ///
    /// Interactive sources already echo their input, so they opt out.
    fn announces_moves(&self) -> bool {
        true
    }
}

impl<O: Opponent + ?Sized> Opponent for Box<O> {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        (**self).select_move(board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn announces_moves(&self) -> bool {
        (**self).announces_moves()
    }
}

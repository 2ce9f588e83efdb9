//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod scenario;

pub use board::{BOARD_SIZE, Board, Cell, Placement, Player};
pub use game::{Game, GameOutcome, Move};
pub use lines::{DIAGONALS, LineAnalyzer, LineCount, WINNING_LINES};
pub use scenario::Scenario;

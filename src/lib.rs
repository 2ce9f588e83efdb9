//! Tic-tac-toe against a deterministic minimax AI
//!
//! This crate provides:
//! - Board model with scoped, self-undoing placements
//! - Two evaluators: a terminal-state checker and a line-pattern heuristic
//! - Exhaustive minimax search and best-move selection for X
//! - A turn loop with human, random, and search-backed opponents
//! - CLI commands for playing and analyzing positions

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod ports;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use error::{Error, Result};
pub use evaluator::{
    DiagonalScoring, Evaluation, Evaluator, EvaluatorKind, HeuristicEvaluator, Score,
    TerminalEvaluator,
};
pub use search::{Minimax, SearchReport, SearchResult};
pub use session::{FirstMover, Session};
pub use tictactoe::{Board, Cell, Game, GameOutcome, Player, Scenario};

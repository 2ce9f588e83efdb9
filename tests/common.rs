//! Common test utilities for the noughts test suite.
//!
//! Board builders and an exhaustive game walker shared by several tests.

#![allow(dead_code)]

use noughts::{
    Board, Cell, Evaluator, GameOutcome, Minimax, Player, TerminalEvaluator,
    tictactoe::WINNING_LINES,
};
use rand::{Rng, rngs::StdRng};

/// Parse a board, panicking on malformed test input.
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|e| panic!("bad test board '{s}': {e}"))
}

/// Board holding exactly one completed line.
pub fn line_board(line: &[usize; 3], player: Player) -> Board {
    let mut b = Board::new();
    for &idx in line {
        b.place(idx, player).unwrap();
    }
    b
}

/// All 16 single-line boards, paired with their owner.
pub fn all_line_boards() -> Vec<(Board, Player)> {
    let mut boards = Vec::new();
    for line in &WINNING_LINES {
        for player in [Player::X, Player::O] {
            boards.push((line_board(line, player), player));
        }
    }
    boards
}

/// Board with every cell drawn uniformly from {Empty, X, O}.
///
/// Piece counts are not balanced, so illegal positions are included.
pub fn random_board(rng: &mut StdRng) -> Board {
    let mut cells = [Cell::Empty; 9];
    for cell in &mut cells {
        *cell = match rng.random_range(0..3) {
            0 => Cell::Empty,
            1 => Cell::X,
            _ => Cell::O,
        };
    }
    Board::from_cells(cells)
}

/// Walk every line of play where the AI (X) follows `search` and O tries
/// every empty cell, calling `visit` on each finished game.
pub fn walk_ai_games(
    search: &Minimax<TerminalEvaluator>,
    board: Board,
    x_to_move: bool,
    visit: &mut dyn FnMut(&Board, GameOutcome),
) {
    if let Some(outcome) = search.evaluator().classify(&board) {
        visit(&board, outcome);
        return;
    }

    if x_to_move {
        let mut scratch = board;
        let cell = search
            .find_best_move(&mut scratch)
            .expect("undecided board has an empty cell");
        let mut next = board;
        next.place(cell, Player::X).unwrap();
        walk_ai_games(search, next, false, visit);
    } else {
        for cell in board.empty_positions() {
            let mut next = board;
            next.place(cell, Player::O).unwrap();
            walk_ai_games(search, next, true, visit);
        }
    }
}

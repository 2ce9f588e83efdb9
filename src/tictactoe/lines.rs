//! Winning line analysis for Tic-Tac-Toe

use std::collections::HashSet;

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// The two diagonals, main first
pub const DIAGONALS: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

/// Piece counts along a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl LineCount {
    /// Line fully held by one player
    pub fn completed_by(&self) -> Option<Player> {
        if self.x == 3 {
            Some(Player::X)
        } else if self.o == 3 {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Two marks of one player and a single empty cell
    pub fn open_pair(&self) -> Option<Player> {
        if self.empty != 1 {
            return None;
        }
        if self.x == 2 {
            Some(Player::X)
        } else if self.o == 2 {
            Some(Player::O)
        } else {
            None
        }
    }
}

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Count the pieces on one line
    pub fn count(cells: &[Cell; 9], line: &[usize; 3]) -> LineCount {
        let mut count = LineCount::default();
        for &idx in line {
            match cells[idx] {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// First completed line in scan order, with the player holding it
    pub fn first_completed_line(cells: &[Cell; 9]) -> Option<(Player, [usize; 3])> {
        WINNING_LINES.iter().find_map(|line| {
            Self::count(cells, line)
                .completed_by()
                .map(|player| (player, *line))
        })
    }

    /// Find all positions that would immediately win for the player
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> HashSet<usize> {
        let mut moves = HashSet::new();
        for &line in &WINNING_LINES {
            if let Some(pos) = Self::winning_move_in_line(cells, player, &line) {
                moves.insert(pos);
            }
        }
        moves
    }

    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let count = Self::count(cells, line);
        if count.open_pair() != Some(player) {
            return None;
        }
        line.iter().copied().find(|&idx| cells[idx] == Cell::Empty)
    }
}

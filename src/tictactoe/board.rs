//! Board representation and basic operations

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Number of cells on the board
pub const BOARD_SIZE: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' | '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
///
/// X is the maximizing side of the search, O the minimizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// The nine cells of a game, row-major (`index = row * 3 + col`).
///
/// No validity invariant is enforced beyond one value per cell: boards with
/// impossible piece counts are accepted and searched as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::from_cells([Cell::Empty; BOARD_SIZE])
    }

    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is ignored; exactly 9 characters must remain, read as
    /// cells (`X`, `O`, and `-`, `.` or `_` for empty).
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not 9 or any character is not a
    /// valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get all empty positions in index order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the marks a player has on the board
    pub fn count(&self, player: Player) -> usize {
        let target = player.to_cell();
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.count(Player::X) + self.count(Player::O)
    }

    /// Player to move under X-first alternation, or `None` when the piece
    /// counts cannot arise from alternating play.
    pub fn to_move(&self) -> Option<Player> {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        if x == o {
            Some(Player::X)
        } else if x == o + 1 {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one (X is reported first on boards where both have lines)
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Place a mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`](crate::Error::InvalidPosition) for an
    /// index outside 0-8 and [`Error::OccupiedCell`](crate::Error::OccupiedCell)
    /// if the cell already holds a mark.
    pub fn place(&mut self, pos: usize, player: Player) -> Result<(), crate::Error> {
        if pos >= BOARD_SIZE {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::OccupiedCell { position: pos });
        }
        self.cells[pos] = player.to_cell();
        Ok(())
    }

    /// Place a mark for the lifetime of the returned guard.
    ///
    /// The cell is emptied again when the guard drops, on every exit path.
    /// The guard dereferences to the board, so nested placements are taken
    /// through it.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds or already occupied. Callers only
    /// place on cells taken from [`Board::empty_positions`].
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{Board, Cell, Player};
    ///
    /// let mut board = Board::new();
    /// {
    ///     let placed = board.place_scoped(4, Player::X);
    ///     assert_eq!(placed.get(4), Cell::X);
    /// }
    /// assert_eq!(board, Board::new());
    /// ```
    pub fn place_scoped(&mut self, pos: usize, player: Player) -> Placement<'_> {
        assert!(
            pos < BOARD_SIZE,
            "position {pos} is out of bounds (must be 0-8)"
        );
        assert!(
            self.is_empty(pos),
            "scoped placement on occupied position {pos}"
        );
        self.cells[pos] = player.to_cell();
        Placement {
            board: self,
            position: pos,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            let line: Vec<String> = cells.iter().map(|c| c.to_char().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// A mark held on the board until the guard is dropped
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    position: usize,
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.position] = Cell::Empty;
    }
}

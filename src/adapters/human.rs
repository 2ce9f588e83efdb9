//! Console opponent reading moves from a line-oriented input

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    Result,
    ports::Opponent,
    tictactoe::{BOARD_SIZE, Board},
};

/// Prompts for a cell number until a legal one is entered
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use noughts::{adapters::HumanOpponent, ports::Opponent, tictactoe::Board};
///
/// let mut output = Vec::new();
/// let mut human = HumanOpponent::new(Cursor::new("9\n4\n"), &mut output);
/// assert_eq!(human.select_move(&Board::new())?, 4);
/// # Ok::<(), noughts::Error>(())
/// ```
pub struct HumanOpponent<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanOpponent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self) -> Result<Option<String>> {
        write!(self.output, "Enter your move (0-8): ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Opponent for HumanOpponent<R, W> {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        if board.is_full() {
            return Err(crate::Error::NoValidMoves);
        }

        loop {
            let line = self.prompt()?.ok_or(crate::Error::InputClosed)?;
            match line.trim().parse::<usize>() {
                Ok(pos) if pos < BOARD_SIZE && board.is_empty(pos) => return Ok(pos),
                _ => {
                    debug!(input = line.trim(), "rejected move");
                    writeln!(self.output, "Invalid move!")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Player"
    }

    fn announces_moves(&self) -> bool {
        false
    }
}

//! Turn loop between the AI (X) and an opponent (O)

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    adapters::MinimaxOpponent,
    evaluator::Evaluator,
    ports::Opponent,
    tictactoe::{Board, Game, GameOutcome, Player},
};

/// Which side opens the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FirstMover {
    /// The AI when both sides have as many marks, the opponent otherwise
    #[default]
    Auto,
    /// The AI moves first
    Ai,
    /// The opponent moves first
    Opponent,
}

impl FirstMover {
    /// Player opening play on `board`
    pub fn resolve(self, board: &Board) -> Player {
        match self {
            FirstMover::Ai => Player::X,
            FirstMover::Opponent => Player::O,
            FirstMover::Auto => {
                if board.count(Player::X) > board.count(Player::O) {
                    Player::O
                } else {
                    Player::X
                }
            }
        }
    }
}

/// One game between the AI and an opponent
///
/// The AI always plays X and the opponent O. The evaluator that drives the
/// AI's search also decides when the game is over.
pub struct Session<'a, E> {
    board: Board,
    game: Game,
    ai: MinimaxOpponent<E>,
    opponent: Box<dyn Opponent + 'a>,
    next: Player,
}

impl<'a, E: Evaluator> Session<'a, E> {
    pub fn new(
        board: Board,
        ai: MinimaxOpponent<E>,
        opponent: Box<dyn Opponent + 'a>,
        first: FirstMover,
    ) -> Self {
        Self {
            board,
            game: Game::new(board),
            ai,
            next: first.resolve(&board),
            opponent,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_game(self) -> Game {
        self.game
    }

    /// Play until the evaluator reports an outcome, writing the board and
    /// announcements to `out`.
    ///
    /// # Errors
    ///
    /// Propagates failures of the move sources (closed input, no move) and
    /// of writing to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<GameOutcome> {
        info!(
            evaluator = self.ai.evaluator().name(),
            opponent = self.opponent.name(),
            first = %self.next,
            "session started"
        );

        loop {
            if let Some(outcome) = self.conclude(out)? {
                return Ok(outcome);
            }
            writeln!(out, "{}", self.board)?;
            self.take_turn(out)?;
        }
    }

    fn take_turn<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let player = self.next;
        let source: &mut dyn Opponent = match player {
            Player::X => &mut self.ai,
            Player::O => &mut *self.opponent,
        };

        let position = source.select_move(&self.board)?;
        if source.announces_moves() {
            writeln!(out, "{}'s move: {position}", source.name())?;
        }
        debug!(%player, position, "move applied");

        self.board.place(position, player)?;
        self.game.play(position, player)?;
        self.next = player.opponent();
        Ok(())
    }

    fn conclude<W: Write>(&mut self, out: &mut W) -> Result<Option<GameOutcome>> {
        let Some(outcome) = self.ai.evaluator().classify(&self.board) else {
            return Ok(None);
        };

        writeln!(out, "{}", self.board)?;
        writeln!(out, "{outcome}")?;
        info!(?outcome, moves = self.game.moves.len(), "session finished");
        self.game.finish(outcome);
        Ok(Some(outcome))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{
        adapters::{HumanOpponent, RandomOpponent},
        evaluator::TerminalEvaluator,
        tictactoe::Scenario,
    };

    #[test]
    fn auto_first_mover_follows_counts() {
        assert_eq!(FirstMover::Auto.resolve(&Board::new()), Player::X);
        let x_ahead = Board::from_string("X--------").unwrap();
        assert_eq!(FirstMover::Auto.resolve(&x_ahead), Player::O);
        assert_eq!(FirstMover::Opponent.resolve(&Board::new()), Player::O);
        // Two X against one O: the opponent opens
        assert_eq!(FirstMover::Auto.resolve(&Scenario::AiBlock.board()), Player::O);
    }

    #[test]
    fn finished_board_ends_before_any_move() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let mut session = Session::new(
            board,
            MinimaxOpponent::new(TerminalEvaluator),
            Box::new(RandomOpponent::with_seed(1)),
            FirstMover::Auto,
        );
        let mut out = Vec::new();
        assert_eq!(session.run(&mut out).unwrap(), GameOutcome::Draw);
        assert!(session.game().moves.is_empty());
        assert!(String::from_utf8(out).unwrap().ends_with("It's a draw!\n"));
    }

    #[test]
    fn ai_completes_easy_win() {
        let board = Board::from_string("X-XO--OOX").unwrap();
        let mut session = Session::new(
            board,
            MinimaxOpponent::new(TerminalEvaluator),
            Box::new(RandomOpponent::with_seed(1)),
            FirstMover::Auto,
        );
        let mut out = Vec::new();
        let outcome = session.run(&mut out).unwrap();

        assert_eq!(outcome, GameOutcome::Win(Player::X));
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("AI's move: 1"));
        assert!(transcript.ends_with("Player X wins!\n"));
    }

    #[test]
    fn human_moves_are_recorded() {
        // Human blocks the top row; the AI forks at 8 and wins on the right column
        let board = Board::from_string("X-XO--O--").unwrap();
        let input = Cursor::new("1\n4\n");
        let mut prompts = Vec::new();
        let mut session = Session::new(
            board,
            MinimaxOpponent::new(TerminalEvaluator),
            Box::new(HumanOpponent::new(input, &mut prompts)),
            FirstMover::Opponent,
        );
        let mut out = Vec::new();
        let outcome = session.run(&mut out).unwrap();

        assert_eq!(outcome, GameOutcome::Win(Player::X));
        let game = session.into_game();
        assert_eq!(game.moves[0].position, 1);
        assert_eq!(game.moves[0].player, Player::O);
        assert_eq!(game.moves[1].position, 8);
        assert_eq!(game.moves.len(), 4);
        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
    }
}

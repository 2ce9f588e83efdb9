//! Application wiring: builds opponents and evaluators from a configuration
//! and runs a session against the console.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::info;

use super::config::{GameConfig, OpponentKind};
use crate::{
    Result,
    adapters::{HumanOpponent, MinimaxOpponent, RandomOpponent},
    evaluator::{Evaluator, EvaluatorKind, HeuristicEvaluator, TerminalEvaluator},
    ports::Opponent,
    session::{FirstMover, Session},
    tictactoe::{Board, Game},
};

/// Application with injected console streams.
///
/// `input` and `prompts` serve the human opponent; `output` receives the
/// board and announcements.
///
/// # Examples
///
/// ```
/// use std::io::{self, Cursor};
///
/// use noughts::app::{App, GameConfig, OpponentKind};
/// use noughts::tictactoe::{GameOutcome, Player, Scenario};
///
/// let mut app = App::with_io(Cursor::new(""), io::sink(), Vec::new());
/// let config = GameConfig::new()
///     .with_opponent(OpponentKind::Random)
///     .with_scenario(Scenario::AiEasyWin)
///     .with_seed(1);
/// let game = app.play(&config)?;
/// assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
/// # Ok::<(), noughts::Error>(())
/// ```
pub struct App<R, P, W> {
    input: R,
    prompts: P,
    output: W,
}

impl App<StdinLock<'static>, Stdout, Stdout> {
    /// Create an app bound to stdin and stdout.
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout(), io::stdout())
    }
}

impl Default for App<StdinLock<'static>, Stdout, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, P: Write, W: Write> App<R, P, W> {
    pub fn with_io(input: R, prompts: P, output: W) -> Self {
        Self {
            input,
            prompts,
            output,
        }
    }

    /// Play one game with the configured evaluator and opponent.
    ///
    /// The finished game is written to `config.record` when set.
    pub fn play(&mut self, config: &GameConfig) -> Result<Game> {
        let board = config.initial_board()?;
        let opponent: Box<dyn Opponent + '_> = match config.opponent {
            OpponentKind::Human => Box::new(HumanOpponent::new(&mut self.input, &mut self.prompts)),
            OpponentKind::Random => Box::new(match config.seed {
                Some(seed) => RandomOpponent::with_seed(seed),
                None => RandomOpponent::new(),
            }),
        };

        let game = match config.evaluator {
            EvaluatorKind::Terminal => run_session(
                TerminalEvaluator,
                board,
                opponent,
                config.first,
                &mut self.output,
            )?,
            EvaluatorKind::Heuristic => run_session(
                HeuristicEvaluator::new(config.diagonal_scoring),
                board,
                opponent,
                config.first,
                &mut self.output,
            )?,
        };

        if let Some(path) = &config.record {
            game.save(path)?;
            info!(path = %path.display(), "game record saved");
        }

        Ok(game)
    }
}

fn run_session<E: Evaluator, W: Write>(
    evaluator: E,
    board: Board,
    opponent: Box<dyn Opponent + '_>,
    first: FirstMover,
    out: &mut W,
) -> Result<Game> {
    let mut session = Session::new(board, MinimaxOpponent::new(evaluator), opponent, first);
    session.run(out)?;
    Ok(session.into_game())
}

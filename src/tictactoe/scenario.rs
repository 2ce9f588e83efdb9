//! Preset starting positions

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::board::{Board, Cell};

const E: Cell = Cell::Empty;
const X: Cell = Cell::X;
const O: Cell = Cell::O;

/// Named starting boards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Empty board
    #[default]
    Empty,
    /// X completes the top row in one move
    AiEasyWin,
    /// O holds two corners, X threatens the anti-diagonal
    PlayerWin,
    /// Two cells left, no winner possible
    Draw,
    /// X can win on the top row
    AiDecisionToWin,
    /// O holds the center against two X marks
    AiBlock,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::Empty,
        Scenario::AiEasyWin,
        Scenario::PlayerWin,
        Scenario::Draw,
        Scenario::AiDecisionToWin,
        Scenario::AiBlock,
    ];

    /// Name used on the command line and in config files
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Empty => "empty",
            Scenario::AiEasyWin => "ai-easy-win",
            Scenario::PlayerWin => "player-win",
            Scenario::Draw => "draw",
            Scenario::AiDecisionToWin => "ai-decision-to-win",
            Scenario::AiBlock => "ai-block",
        }
    }

    pub fn board(self) -> Board {
        let cells = match self {
            Scenario::Empty => [E; 9],
            Scenario::AiEasyWin => [X, E, X, O, E, E, O, O, X],
            Scenario::PlayerWin => [O, E, E, E, X, E, X, E, O],
            Scenario::Draw => [X, O, X, E, E, O, O, X, O],
            Scenario::AiDecisionToWin => [X, E, X, O, E, E, O, E, E],
            Scenario::AiBlock => [E, E, X, X, O, E, E, E, E],
        };
        Board::from_cells(cells)
    }
}

//! One-shot position analysis behind the `analyze` command

use serde::Serialize;

use crate::{
    evaluator::{
        DiagonalScoring, Evaluator, EvaluatorKind, HeuristicEvaluator, Score, TerminalEvaluator,
    },
    search::{Minimax, SearchReport},
    tictactoe::{Board, GameOutcome, LineAnalyzer, Player},
};

/// Everything the AI sees in a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardAnalysis {
    pub board: Board,
    pub evaluator: EvaluatorKind,
    /// Outcome if the game is already over
    pub verdict: Option<GameOutcome>,
    /// Terminal value or heuristic score of the position itself
    pub static_score: Option<Score>,
    pub to_move: Option<Player>,
    /// Cells completing a line for X
    pub x_threats: Vec<usize>,
    /// Cells completing a line for O
    pub o_threats: Vec<usize>,
    pub search: SearchReport,
}

/// Evaluate `board` and run the move selector for X on it.
pub fn analyze_board(
    board: &Board,
    evaluator: EvaluatorKind,
    diagonals: DiagonalScoring,
) -> BoardAnalysis {
    match evaluator {
        EvaluatorKind::Terminal => {
            let static_score = TerminalEvaluator.evaluate(board).value();
            analyze_with(board, evaluator, TerminalEvaluator, static_score)
        }
        EvaluatorKind::Heuristic => {
            let heuristic = HeuristicEvaluator::new(diagonals);
            let static_score = Some(heuristic.evaluate(board));
            analyze_with(board, evaluator, heuristic, static_score)
        }
    }
}

fn analyze_with<E: Evaluator>(
    board: &Board,
    kind: EvaluatorKind,
    evaluator: E,
    static_score: Option<Score>,
) -> BoardAnalysis {
    let verdict = evaluator.classify(board);
    let mut scratch = *board;
    let search = Minimax::new(evaluator).analyze(&mut scratch);

    BoardAnalysis {
        board: *board,
        evaluator: kind,
        verdict,
        static_score,
        to_move: board.to_move(),
        x_threats: sorted(LineAnalyzer::winning_moves(&board.cells, Player::X)),
        o_threats: sorted(LineAnalyzer::winning_moves(&board.cells, Player::O)),
        search,
    }
}

fn sorted(cells: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut cells: Vec<usize> = cells.into_iter().collect();
    cells.sort_unstable();
    cells
}

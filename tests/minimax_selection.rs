//! Move selection properties of the minimax search

mod common;

use common::{board, random_board, walk_ai_games};
use noughts::{
    Board, DiagonalScoring, GameOutcome, HeuristicEvaluator, Minimax, Player, Scenario,
    SearchResult, TerminalEvaluator,
};
use rand::{SeedableRng, rngs::StdRng};

mod optimality {
    use super::*;

    #[test]
    fn takes_the_immediate_win() {
        let search = Minimax::new(TerminalEvaluator);
        let mut b = Scenario::AiEasyWin.board();
        assert_eq!(search.find_best_move(&mut b), Some(1));
    }

    #[test]
    fn decision_to_win_prefers_the_winning_cell() {
        // X - X
        // O - -
        // O - -
        let search = Minimax::new(TerminalEvaluator);
        let mut b = Scenario::AiDecisionToWin.board();
        let result = search.best_move(&mut b).unwrap();
        assert_eq!(result, SearchResult { cell: 1, score: 1 });
    }

    #[test]
    fn block_scenario_finds_the_fork() {
        // - - X
        // X O -
        // - - -
        let search = Minimax::new(TerminalEvaluator);
        let mut b = Scenario::AiBlock.board();
        assert_eq!(
            search.best_move(&mut b),
            Some(SearchResult { cell: 0, score: 1 })
        );
    }

    #[test]
    fn best_score_is_the_maximum_of_all_moves() {
        let search = Minimax::new(TerminalEvaluator);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let mut b = random_board(&mut rng);
            let report = search.analyze(&mut b);
            let max = report.moves.iter().map(|&(_, score)| score).max();
            assert_eq!(report.best.map(|r| r.score), max, "board:\n{b}");

            // Ties resolve to the first cell holding the maximum
            let first = report.moves.iter().find(|&&(_, score)| Some(score) == max);
            assert_eq!(report.best.map(|r| r.cell), first.map(|&(cell, _)| cell));
        }
    }
}

mod never_loses {
    use super::*;

    fn assert_no_o_wins(start: Board, x_to_move: bool) -> usize {
        let search = Minimax::new(TerminalEvaluator);
        let mut games = 0;
        walk_ai_games(&search, start, x_to_move, &mut |end, outcome| {
            games += 1;
            assert_ne!(outcome, GameOutcome::Win(Player::O), "AI lost:\n{end}");
        });
        games
    }

    #[test]
    fn from_block_scenario() {
        assert!(assert_no_o_wins(Scenario::AiBlock.board(), true) > 0);
    }

    #[test]
    fn from_empty_board_moving_first() {
        assert!(assert_no_o_wins(Board::new(), true) > 0);
    }

    #[test]
    fn from_empty_board_moving_second() {
        assert!(assert_no_o_wins(Board::new(), false) > 0);
    }
}

mod determinism {
    use super::*;

    #[test]
    fn repeated_calls_agree() {
        let terminal = Minimax::new(TerminalEvaluator);
        let heuristic = Minimax::new(HeuristicEvaluator::default());
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let mut b = random_board(&mut rng);
            assert_eq!(terminal.analyze(&mut b), terminal.analyze(&mut b));
            assert_eq!(heuristic.analyze(&mut b), heuristic.analyze(&mut b));
        }
    }
}

mod board_restoration {
    use super::*;

    #[test]
    fn search_leaves_no_residue() {
        let terminal = Minimax::new(TerminalEvaluator);
        let double = Minimax::new(HeuristicEvaluator::new(DiagonalScoring::DoubleCount));
        let single = Minimax::new(HeuristicEvaluator::new(DiagonalScoring::Single));
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..200 {
            let mut b = random_board(&mut rng);
            let before = b;

            terminal.find_best_move(&mut b);
            terminal.minimax(&mut b, true);
            terminal.minimax(&mut b, false);
            double.find_best_move(&mut b);
            single.evaluate_moves(&mut b);

            assert_eq!(b, before);
        }
    }

    #[test]
    fn full_board_has_no_move() {
        for s in ["XOXXOOOXX", "XXXOOXOXO", "OOOXXOXXO"] {
            let mut b = board(s);
            assert_eq!(Minimax::new(TerminalEvaluator).find_best_move(&mut b), None);
            assert_eq!(
                Minimax::new(HeuristicEvaluator::default()).find_best_move(&mut b),
                None
            );
        }
    }
}

mod heuristic_search {
    use super::*;

    #[test]
    fn diagonal_double_count_steers_the_choice() {
        let mut b = Scenario::AiEasyWin.board();

        let double = Minimax::new(HeuristicEvaluator::new(DiagonalScoring::DoubleCount));
        assert_eq!(
            double.best_move(&mut b),
            Some(SearchResult { cell: 4, score: 220 })
        );

        let single = Minimax::new(HeuristicEvaluator::new(DiagonalScoring::Single));
        assert_eq!(single.find_best_move(&mut b), Some(1));
    }

    #[test]
    fn any_signal_stops_the_search() {
        // A lone open pair is already a cutoff for both sides
        let search = Minimax::new(HeuristicEvaluator::default());
        let mut b = board("OO-------");
        assert_eq!(search.minimax(&mut b, true), -10);
        assert_eq!(search.minimax(&mut b, false), -10);
    }
}

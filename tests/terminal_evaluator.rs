//! Terminal-state detection over whole boards

mod common;

use common::{all_line_boards, board, random_board};
use noughts::{Board, Evaluation, Evaluator, GameOutcome, Player, TerminalEvaluator};
use rand::{SeedableRng, rngs::StdRng};

mod decisive {
    use super::*;

    #[test]
    fn every_line_wins_for_its_owner() {
        for (b, owner) in all_line_boards() {
            assert_eq!(
                TerminalEvaluator.evaluate(&b),
                Evaluation::Decisive(GameOutcome::Win(owner)),
                "board:\n{b}"
            );
        }
    }

    #[test]
    fn line_values_are_signed_by_owner() {
        for (b, owner) in all_line_boards() {
            let expected = match owner {
                Player::X => 1,
                Player::O => -1,
            };
            assert_eq!(TerminalEvaluator.cutoff(&b), Some(expected));
        }
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let b = board("XOX XOO OXX");
        assert_eq!(
            TerminalEvaluator.evaluate(&b),
            Evaluation::Decisive(GameOutcome::Draw)
        );
        assert_eq!(TerminalEvaluator.cutoff(&b), Some(0));
    }

    #[test]
    fn win_on_the_last_cell_is_not_a_draw() {
        // X O X
        // O X O
        // O X X
        let b = board("XOXOXOOXX");
        assert!(b.is_full());
        assert_eq!(
            TerminalEvaluator.classify(&b),
            Some(GameOutcome::Win(Player::X))
        );
    }
}

mod undecided {
    use super::*;

    #[test]
    fn empty_board() {
        assert_eq!(TerminalEvaluator.evaluate(&Board::new()), Evaluation::Undecided);
        assert_eq!(TerminalEvaluator.classify(&Board::new()), None);
    }

    #[test]
    fn open_pairs_are_not_decisive() {
        let b = board("XX-OO----");
        assert_eq!(TerminalEvaluator.evaluate(&b), Evaluation::Undecided);
    }
}

mod consistency {
    use super::*;

    #[test]
    fn agrees_with_board_queries_on_single_winner_boards() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..2000 {
            let b = random_board(&mut rng);
            let x = b.has_won(Player::X);
            let o = b.has_won(Player::O);
            if x && o {
                continue;
            }

            let expected = match b.winner() {
                Some(player) => Evaluation::Decisive(GameOutcome::Win(player)),
                None if b.is_full() => Evaluation::Decisive(GameOutcome::Draw),
                None => Evaluation::Undecided,
            };
            assert_eq!(TerminalEvaluator.evaluate(&b), expected, "board:\n{b}");
        }
    }

    #[test]
    fn evaluation_is_read_only() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let b = random_board(&mut rng);
            let before = b;
            TerminalEvaluator.evaluate(&b);
            assert_eq!(b, before);
        }
    }
}

//! Output formatting for CLI

use crate::{
    evaluator::Score,
    search::SearchResult,
    tictactoe::{Board, Cell},
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Board with empty cells replaced by their index, for choosing a move
pub fn format_board_with_indices(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Empty => (row * 3 + col).to_string(),
                    other => other.to_char().to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    rows.join("\n")
}

/// Print root move scores, marking the chosen move
pub fn print_move_scores(moves: &[(usize, Score)], best: Option<SearchResult>) {
    if moves.is_empty() {
        println!("  (no empty cell)");
        return;
    }
    for &(cell, score) in moves {
        let marker = if best.is_some_and(|b| b.cell == cell) {
            "  <- best"
        } else {
            ""
        };
        println!("  cell {cell}: {score:>6}{marker}");
    }
}

/// Format a list of cells, or a dash when empty
pub fn format_cells(cells: &[usize]) -> String {
    if cells.is_empty() {
        "-".to_string()
    } else {
        cells
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

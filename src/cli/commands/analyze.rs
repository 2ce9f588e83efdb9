//! Analyze command - Show how the AI sees a position

use anyhow::Result;
use clap::Parser;

use crate::{
    app::{BoardAnalysis, analyze_board},
    cli::output::{format_cells, print_kv, print_move_scores, print_section, print_subsection},
    evaluator::{DiagonalScoring, EvaluatorKind},
    tictactoe::{Board, Scenario},
};

#[derive(Parser, Debug)]
#[command(about = "Show evaluator verdict, move scores, and the AI's choice for a board")]
pub struct AnalyzeArgs {
    /// Board as 9 cells, e.g. "--XXO----"; overrides --scenario
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Preset starting board
    #[arg(long, short = 's', value_enum, default_value_t = Scenario::Empty)]
    pub scenario: Scenario,

    /// Evaluation strategy of the AI
    #[arg(long, short = 'e', value_enum, default_value_t = EvaluatorKind::Terminal)]
    pub evaluator: EvaluatorKind,

    /// Diagonal handling of the heuristic evaluator
    #[arg(long, value_enum, default_value_t = DiagonalScoring::DoubleCount)]
    pub diagonal_scoring: DiagonalScoring,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = match &args.board {
        Some(s) => Board::from_string(s)?,
        None => args.scenario.board(),
    };

    let analysis = analyze_board(&board, args.evaluator, args.diagonal_scoring);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&analysis);
    }

    Ok(())
}

fn print_analysis(analysis: &BoardAnalysis) {
    print_section("Position");
    println!("{}", analysis.board);

    print_subsection("Evaluation");
    print_kv("Evaluator", &format!("{:?}", analysis.evaluator));
    print_kv(
        "Verdict",
        &analysis
            .verdict
            .map_or_else(|| "undecided".to_string(), |outcome| outcome.to_string()),
    );
    print_kv(
        "Static score",
        &analysis
            .static_score
            .map_or_else(|| "-".to_string(), |score| score.to_string()),
    );
    print_kv(
        "To move",
        &analysis
            .to_move
            .map_or_else(|| "inconsistent counts".to_string(), |p| p.to_string()),
    );
    print_kv("X threats", &format_cells(&analysis.x_threats));
    print_kv("O threats", &format_cells(&analysis.o_threats));

    print_subsection("Search (X to move)");
    print_move_scores(&analysis.search.moves, analysis.search.best);
    print_kv("Nodes", &analysis.search.nodes.to_string());
    match analysis.search.best {
        Some(best) => print_kv("Best move", &format!("{} (score {})", best.cell, best.score)),
        None => print_kv("Best move", "none (board full)"),
    }
}

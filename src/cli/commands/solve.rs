//! Solve command - one-shot best-move query for a position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{format_number, format_score, print_kv, print_section},
    game::{ModeKind, PileState},
    search::{SearchEngine, SearchStrategy},
};

#[derive(Debug, Parser)]
pub struct SolveArgs {
    /// Game mode: classic, misere
    #[arg(short, long, default_value = "classic")]
    pub mode: String,

    /// Pile sizes of the position to solve, e.g. 3,4,2
    #[arg(long)]
    pub piles: String,

    /// Use alpha-beta pruning
    #[arg(long)]
    pub pruning: bool,

    /// Search for the minimizing side instead of the maximizing side
    #[arg(long)]
    pub minimizing: bool,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let mode_kind: ModeKind = args.mode.parse()?;
    let piles = PileState::new(super::parse_piles(&args.piles)?);

    let strategy = if args.pruning {
        SearchStrategy::AlphaBeta
    } else {
        SearchStrategy::Exhaustive
    };
    let mut engine = SearchEngine::new(mode_kind.build(), strategy);
    let outcome = engine.best_move(&piles, !args.minimizing);

    print_section("Position Analysis");
    print_kv("Mode", mode_kind.as_str());
    print_kv("Strategy", &strategy.to_string());
    print_kv("Position", &piles.to_string());
    print_kv("Score", &format_score(outcome.score));
    match outcome.best {
        Some(mv) => print_kv("Best move", &mv.to_string()),
        None => print_kv("Best move", "none (no move improves the position)"),
    }
    print_kv("Nodes", &format_number(engine.nodes_expanded() as usize));

    Ok(())
}

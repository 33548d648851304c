//! Analyze command - game tree statistics and export

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    app::{App, MatchConfig},
    cli::output::{create_spinner, format_number, print_kv, print_section},
    export::{write_dot, write_json},
    game::{GameTreeNode, ModeKind, build_game_tree},
};

#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Game mode: classic, misere
    #[arg(short, long, default_value = "classic")]
    pub mode: String,

    /// Explicit pile sizes, e.g. 3,4,2 (overrides --pile-count)
    #[arg(long)]
    pub piles: Option<String>,

    /// Number of piles to set up at random (2-4 when omitted)
    #[arg(long)]
    pub pile_count: Option<usize>,

    /// Largest randomly drawn pile size
    #[arg(long, default_value_t = 4)]
    pub max_pile_size: usize,

    /// Seed for the random setup
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the tree as Graphviz DOT
    #[arg(long)]
    pub export_dot: Option<PathBuf>,

    /// Export the tree as JSON
    #[arg(long)]
    pub export_json: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let mode_kind: ModeKind = args.mode.parse()?;

    let mut config = MatchConfig::new(mode_kind);
    if let Some(piles) = &args.piles {
        config = config.with_pile_sizes(super::parse_piles(piles)?);
    }
    if let Some(count) = args.pile_count {
        config = config.with_pile_count(count);
    }
    config = config.with_max_pile_size(args.max_pile_size);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let app = App::new();
    let initial = app.initial_piles(&config)?;

    let spinner = create_spinner(&format!("Enumerating move sequences from {initial}"));
    let tree = build_game_tree(&initial);
    spinner.finish_and_clear();

    print_section("Game Tree Statistics");
    print_kv("Mode", mode_kind.as_str());
    print_kv("Initial piles", &initial.to_string());
    print_kv("Nodes", &format_number(tree.node_count()));
    print_kv("Leaves", &format_number(tree.leaf_count()));
    print_kv("Max depth", &format_number(tree.depth()));

    println!("\nNodes by depth:");
    for (depth, count) in nodes_by_depth(&tree).iter().enumerate() {
        println!("  Depth {depth}: {} nodes", format_number(*count));
    }

    if let Some(path) = &args.export_dot {
        write_dot(&tree, mode_kind.build().as_ref(), path)?;
        println!("\nGame tree exported to: {}", path.display());
    }

    if let Some(path) = &args.export_json {
        write_json(&tree, path)?;
        println!("\nGame tree exported to: {}", path.display());
    }

    Ok(())
}

fn nodes_by_depth(root: &GameTreeNode) -> Vec<usize> {
    let mut counts: Vec<usize> = Vec::new();
    let mut stack = vec![(root, 0usize)];
    while let Some((node, depth)) = stack.pop() {
        if counts.len() <= depth {
            counts.resize(depth + 1, 0);
        }
        counts[depth] += 1;
        stack.extend(node.children.iter().map(|child| (child, depth + 1)));
    }
    counts
}

//! Graphviz DOT rendering of a game tree
//!
//! The renderer consumes the tree structure only (state, move, player,
//! children); the winner annotation on leaves comes from the game mode's
//! win rule, never from re-deriving play.

use std::fmt::Write as _;
use std::{fs, path::Path};

use crate::{
    Error, Result,
    game::{GameMode, GameTreeNode},
};

/// Render a game tree as Graphviz DOT text.
pub fn render_dot(root: &GameTreeNode, mode: &dyn GameMode) -> String {
    let mut out = String::new();
    out.push_str("digraph game_tree {\n");
    out.push_str("    node [shape=box, fontname=\"monospace\"];\n");

    let mut next_id = 0usize;
    render_node(root, mode, None, &mut next_id, &mut out);

    out.push_str("}\n");
    out
}

/// Render a game tree to a DOT file.
pub fn write_dot(root: &GameTreeNode, mode: &dyn GameMode, path: &Path) -> Result<()> {
    fs::write(path, render_dot(root, mode))
        .map_err(|source| Error::io(format!("write DOT file {}", path.display()), source))
}

fn render_node(
    node: &GameTreeNode,
    mode: &dyn GameMode,
    parent: Option<usize>,
    next_id: &mut usize,
    out: &mut String,
) {
    let id = *next_id;
    *next_id += 1;

    let mut label = match (node.player, node.mv) {
        (Some(player), Some(mv)) => {
            format!("{player}: pile {}, take {}", mv.pile + 1, mv.count)
        }
        _ => "Initial state".to_string(),
    };
    let sizes: Vec<String> = node.piles.sizes().iter().map(ToString::to_string).collect();
    let _ = write!(label, "\\npiles [{}]", sizes.join(", "));

    if node.is_leaf()
        && let Some(player) = node.player
        && let Ok(winner) = mode.winner(player, player.opponent(), &node.piles)
    {
        let _ = write!(label, "\\nwinner: {winner}");
    }

    let _ = writeln!(out, "    n{id} [label=\"{label}\"];");
    if let Some(parent) = parent {
        let _ = writeln!(out, "    n{parent} -> n{id};");
    }

    for child in &node.children {
        render_node(child, mode, Some(id), next_id, out);
    }
}

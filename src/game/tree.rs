//! Exhaustive game tree construction
//!
//! The tree enumerates move *sequences*, not unique states: a position
//! reached along two different move orders appears once per order. It exists
//! for visualization and inspection; the search engine never consults it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{
    piles::{Move, PileState},
    player::Player,
};

/// One node of the full move-sequence tree.
///
/// The root carries no move and no player; every other node records the
/// move that produced it and the seat that made that move. Children are
/// ordered by ascending `(pile, count)`, matching [`PileState::legal_moves`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameTreeNode {
    pub piles: PileState,
    pub mv: Option<Move>,
    pub player: Option<Player>,
    pub children: Vec<GameTreeNode>,
}

impl GameTreeNode {
    /// Total nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(GameTreeNode::node_count).sum::<usize>()
    }

    /// Number of leaves (terminal positions) in this subtree.
    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            return 1;
        }
        self.children.iter().map(GameTreeNode::leaf_count).sum()
    }

    /// Length of the longest move sequence below this node.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// Arena slot used while the tree is under construction; children are index
// references until materialization.
struct Slot {
    piles: PileState,
    mv: Option<Move>,
    player: Option<Player>,
    children: Vec<usize>,
}

/// Build the entire reachable move-sequence tree from an initial position.
///
/// Breadth-first: nodes are expanded in discovery order, the acting seat is
/// derived from depth parity (depth 1 = first mover), and children are
/// generated in ascending `(pile, count)` order. No memoization, no
/// deduplication; the result grows at the same exponential rate as raw
/// unpruned minimax.
pub fn build_game_tree(initial: &PileState) -> GameTreeNode {
    let mut arena = vec![Slot {
        piles: initial.clone(),
        mv: None,
        player: None,
        children: Vec::new(),
    }];

    let mut queue = VecDeque::new();
    queue.push_back((0usize, 1usize));

    while let Some((index, depth)) = queue.pop_front() {
        let acting = Player::for_depth(depth);

        for mv in arena[index].piles.legal_moves() {
            let next = arena[index]
                .piles
                .apply(mv)
                .expect("enumerated moves are always legal");

            let child_index = arena.len();
            arena.push(Slot {
                piles: next,
                mv: Some(mv),
                player: Some(acting),
                children: Vec::new(),
            });
            arena[index].children.push(child_index);
            queue.push_back((child_index, depth + 1));
        }
    }

    materialize(arena)
}

// Children always sit at higher indices than their parent, so a reverse
// sweep can assemble every subtree before its owner asks for it.
fn materialize(arena: Vec<Slot>) -> GameTreeNode {
    let mut built: Vec<Option<GameTreeNode>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);

    for index in (0..arena.len()).rev() {
        let slot = &arena[index];
        let children = slot
            .children
            .iter()
            .map(|&child| {
                built[child]
                    .take()
                    .expect("children are materialized before their parent")
            })
            .collect();
        built[index] = Some(GameTreeNode {
            piles: slot.piles.clone(),
            mv: slot.mv,
            player: slot.player,
            children,
        });
    }

    built[0]
        .take()
        .expect("root is materialized last")
}

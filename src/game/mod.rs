//! Game core: pile states, moves, seats, modes, and the full game tree

pub mod modes;
pub mod piles;
pub mod player;
pub mod tree;

pub use modes::{Classic, GameMode, LOSS, Misere, ModeKind, Score, WIN};
pub use piles::{Move, PileState};
pub use player::Player;
pub use tree::{GameTreeNode, build_game_tree};

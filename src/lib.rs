//! Two-player take-away (Nim-family) game engine
//!
//! This crate provides:
//! - Immutable pile states with validated move application
//! - Pluggable game modes (classic and misère win rules + evaluators)
//! - Full-depth minimax search, exhaustive and alpha-beta-pruned
//! - Exhaustive game-tree enumeration for visualization and analysis
//! - A match loop alternating human and engine move sources

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod export;
pub mod game;
pub mod players;
pub mod ports;
pub mod search;
pub mod session;

pub use error::{Error, Result};
pub use game::{
    Classic, GameMode, GameTreeNode, LOSS, Misere, ModeKind, Move, PileState, Player, Score, WIN,
    build_game_tree,
};
pub use search::{SearchEngine, SearchOutcome, SearchStrategy};
pub use session::{MatchOutcome, MatchSession};

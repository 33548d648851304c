//! Player seats

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two seats at the table.
///
/// Seats are fixed for a match; names and move sources are bound to seats
/// by the session, not stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the opposing seat
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The seat acting at the given search/tree depth (depth 1 = first mover).
    pub fn for_depth(depth: usize) -> Player {
        if depth % 2 == 1 {
            Player::One
        } else {
            Player::Two
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

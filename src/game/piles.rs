//! Pile state representation and move application

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single take-away move: remove `count` objects from pile `pile`.
///
/// Pile indices are zero-based internally; user-facing output is one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub pile: usize,
    pub count: usize,
}

impl Move {
    pub fn new(pile: usize, count: usize) -> Self {
        Move { pile, count }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "take {} from pile {}", self.count, self.pile + 1)
    }
}

/// Immutable snapshot of pile sizes.
///
/// The ordered size sequence is the canonical state: equality and hashing
/// use the full sequence, never a multiset, because moves reference pile
/// indices. A pile of size 0 stays at its index; piles never gain objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileState {
    sizes: Vec<usize>,
}

impl PileState {
    /// Create a state from explicit pile sizes.
    pub fn new(sizes: Vec<usize>) -> Self {
        PileState { sizes }
    }

    /// Number of piles, including empty ones.
    pub fn pile_count(&self) -> usize {
        self.sizes.len()
    }

    /// Size of one pile, or `None` when the index is out of range.
    pub fn size(&self, pile: usize) -> Option<usize> {
        self.sizes.get(pile).copied()
    }

    /// The ordered size sequence.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Total objects remaining across all piles.
    pub fn total_objects(&self) -> usize {
        self.sizes.iter().sum()
    }

    /// Number of piles still holding at least one object.
    pub fn non_empty_piles(&self) -> usize {
        self.sizes.iter().filter(|&&size| size > 0).count()
    }

    /// True when every pile is empty (the terminal position).
    pub fn is_cleared(&self) -> bool {
        self.sizes.iter().all(|&size| size == 0)
    }

    /// Every legal move from this state, in ascending pile-index then
    /// ascending-count order.
    ///
    /// This ordering is the tie-break contract shared by the search engine
    /// and the tree builder: the first move reaching the best score wins.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (pile, &size) in self.sizes.iter().enumerate() {
            for count in 1..=size {
                moves.push(Move { pile, count });
            }
        }
        moves
    }

    /// Apply a move, producing the successor state.
    ///
    /// Pure transition: the input state is never mutated, so simulated
    /// search moves and real match moves go through the identical path.
    ///
    /// # Errors
    ///
    /// [`crate::Error::PileOutOfRange`] when the pile index is out of range,
    /// [`crate::Error::InvalidMove`] when the count is outside `[1, size]`.
    pub fn apply(&self, mv: Move) -> Result<PileState, crate::Error> {
        let Some(available) = self.size(mv.pile) else {
            return Err(crate::Error::PileOutOfRange {
                pile: mv.pile,
                pile_count: self.pile_count(),
            });
        };

        if mv.count < 1 || mv.count > available {
            return Err(crate::Error::InvalidMove {
                pile: mv.pile,
                count: mv.count,
                available,
            });
        }

        let mut sizes = self.sizes.clone();
        sizes[mv.pile] = available - mv.count;
        Ok(PileState { sizes })
    }
}

impl From<Vec<usize>> for PileState {
    fn from(sizes: Vec<usize>) -> Self {
        PileState::new(sizes)
    }
}

impl fmt::Display for PileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, &size) in self.sizes.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(
                f,
                "Pile {}: {} ({} objects)",
                index + 1,
                "#".repeat(size),
                size
            )?;
        }
        Ok(())
    }
}

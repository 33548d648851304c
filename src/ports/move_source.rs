//! Move source port

use crate::{
    Result,
    game::{Move, PileState},
};

/// Anything that can produce the next move for a seat: a human at a prompt
/// or a search engine.
///
/// Sources receive a read-only snapshot of the piles and must not assume it
/// outlives the call. Semantic validation belongs to the match loop; a
/// source only promises a well-formed candidate.
pub trait MoveSource {
    /// Display name used in prompts, logs, and the winner announcement.
    fn name(&self) -> &str;

    /// Produce a candidate move for the given position.
    fn propose_move(&mut self, piles: &PileState) -> Result<Move>;

    /// Whether the match loop should re-prompt this source after a move
    /// fails validation instead of treating the failure as a defect.
    fn interactive(&self) -> bool {
        false
    }
}

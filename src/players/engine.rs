//! Engine move source backed by minimax search

use crate::{
    Error, Result,
    game::{GameMode, Move, PileState},
    ports::MoveSource,
    search::{SearchEngine, SearchStrategy},
};

/// Move source that plays the search engine's choice.
///
/// The engine and its memo table live for the whole match: mode and rules
/// are fixed per match, so cached scores stay valid across turns.
pub struct EnginePlayer {
    name: String,
    engine: SearchEngine,
}

impl EnginePlayer {
    pub fn new(name: impl Into<String>, mode: Box<dyn GameMode>, strategy: SearchStrategy) -> Self {
        EnginePlayer {
            name: name.into(),
            engine: SearchEngine::new(mode, strategy),
        }
    }

    /// The underlying search engine, for node-count inspection.
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }
}

impl MoveSource for EnginePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose_move(&mut self, piles: &PileState) -> Result<Move> {
        let outcome = self.engine.best_move(piles, true);

        // a position lost from every move yields no best candidate; any
        // legal move is as good as another, so take the first
        let mv = match outcome.best {
            Some(mv) => mv,
            None => *piles.legal_moves().first().ok_or(Error::MatchNotOver)?,
        };

        println!("\n{} (AI) takes {} objects from pile {}.", self.name, mv.count, mv.pile + 1);
        Ok(mv)
    }
}

//! Adversarial search over pile states
//!
//! Two interchangeable variants of full-depth minimax drive the engine
//! player: an exhaustive search memoized over `(state, maximizing)`, and an
//! alpha-beta-pruned search that must choose the same move while visiting
//! fewer nodes. Both ask the active [`GameMode`] for every score, so the
//! engine itself carries no game knowledge beyond move enumeration.

use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    game::{GameMode, LOSS, Move, PileState, Score, WIN},
};

/// Which search algorithm the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Plain minimax, every line explored, results memoized.
    Exhaustive,
    /// Alpha-beta pruning, no memoization.
    AlphaBeta,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::Exhaustive => write!(f, "exhaustive"),
            SearchStrategy::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exhaustive" | "minimax" => Ok(SearchStrategy::Exhaustive),
            "alpha-beta" | "alphabeta" | "pruned" => Ok(SearchStrategy::AlphaBeta),
            _ => Err(Error::ParseStrategy {
                input: s.to_string(),
                expected: "exhaustive, alpha-beta",
            }),
        }
    }
}

/// Result of a search: the position's value and the move achieving it.
///
/// `best` is `None` on a terminal position, and also when no candidate ever
/// strictly improved on the sentinel start value (a position proven lost
/// from every move). Callers that must act anyway fall back to the first
/// legal move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub score: Score,
    pub best: Option<Move>,
}

/// Full-depth minimax engine for one game mode.
///
/// The memo table is keyed by `(PileState, maximizing)` and serves only the
/// exhaustive strategy. It may be reused across turns of a single match
/// (mode and rules are fixed there); independent games build their own
/// engine so cached scores never leak between modes.
pub struct SearchEngine {
    mode: Box<dyn GameMode>,
    strategy: SearchStrategy,
    memo: HashMap<(PileState, bool), SearchOutcome>,
    nodes: u64,
}

impl SearchEngine {
    pub fn new(mode: Box<dyn GameMode>, strategy: SearchStrategy) -> Self {
        SearchEngine {
            mode,
            strategy,
            memo: HashMap::new(),
            nodes: 0,
        }
    }

    pub fn mode(&self) -> &dyn GameMode {
        self.mode.as_ref()
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Positions expanded since construction or the last [`reset`].
    ///
    /// Memo hits do not count; two identical queries in a row therefore
    /// leave the counter unchanged on the second call.
    ///
    /// [`reset`]: SearchEngine::reset
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes
    }

    /// Drop all cached results and zero the node counter.
    pub fn reset(&mut self) {
        self.memo.clear();
        self.nodes = 0;
    }

    /// Search the position and return its value with the best move.
    ///
    /// Terminal positions (all piles empty) evaluate directly and carry no
    /// move. Ties between candidate moves go to the earliest in ascending
    /// `(pile, count)` order, for both strategies.
    pub fn best_move(&mut self, piles: &PileState, maximizing: bool) -> SearchOutcome {
        match self.strategy {
            SearchStrategy::Exhaustive => self.minimax(piles, maximizing),
            SearchStrategy::AlphaBeta => self.alphabeta(piles, maximizing, LOSS, WIN),
        }
    }

    // Candidate handling shared by both variants: the one-ply heuristic is
    // compared first, and only when it fails to improve does the recursive
    // score compete. A move is therefore backed by whichever of the two
    // values wins against the incumbent, never by a short-circuit.
    fn minimax(&mut self, piles: &PileState, maximizing: bool) -> SearchOutcome {
        let key = (piles.clone(), maximizing);
        if let Some(outcome) = self.memo.get(&key) {
            return *outcome;
        }

        self.nodes += 1;

        if piles.is_cleared() {
            let outcome = SearchOutcome {
                score: self.mode.evaluate(piles),
                best: None,
            };
            self.memo.insert(key, outcome);
            return outcome;
        }

        let mut best_score = if maximizing { LOSS } else { WIN };
        let mut best = None;

        for mv in piles.legal_moves() {
            let child = piles.apply(mv).expect("enumerated moves are always legal");
            let immediate = self.mode.evaluate(&child);

            if maximizing && immediate > best_score {
                best_score = immediate;
                best = Some(mv);
            } else if !maximizing && immediate < best_score {
                best_score = immediate;
                best = Some(mv);
            } else {
                let deeper = self.minimax(&child, !maximizing);
                if maximizing && deeper.score > best_score {
                    best_score = deeper.score;
                    best = Some(mv);
                } else if !maximizing && deeper.score < best_score {
                    best_score = deeper.score;
                    best = Some(mv);
                }
            }
        }

        let outcome = SearchOutcome {
            score: best_score,
            best,
        };
        self.memo.insert(key, outcome);
        outcome
    }

    // The window handed to a recursive call carries only this node's running
    // best on its own side; the opposite bound reopens to the sentinel. A
    // bound inherited from deeper ancestors is not forwarded: under the
    // heuristic-fallback rule it can flip a child between its one-ply score
    // and its recursive score, changing the chosen move. With the one-level
    // window every pruned candidate is non-improving for the caller, so this
    // variant matches the exhaustive engine move for move.
    //
    // Scores found under a narrowed window are bounds, not exact values, so
    // they are not cached.
    fn alphabeta(
        &mut self,
        piles: &PileState,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> SearchOutcome {
        self.nodes += 1;

        if piles.is_cleared() {
            return SearchOutcome {
                score: self.mode.evaluate(piles),
                best: None,
            };
        }

        let mut best_score = if maximizing { LOSS } else { WIN };
        let mut best = None;

        for mv in piles.legal_moves() {
            let child = piles.apply(mv).expect("enumerated moves are always legal");
            let immediate = self.mode.evaluate(&child);

            if maximizing && immediate > best_score {
                best_score = immediate;
                best = Some(mv);
            } else if !maximizing && immediate < best_score {
                best_score = immediate;
                best = Some(mv);
            } else {
                let deeper = if maximizing {
                    self.alphabeta(&child, false, alpha, WIN)
                } else {
                    self.alphabeta(&child, true, LOSS, beta)
                };
                if maximizing && deeper.score > best_score {
                    best_score = deeper.score;
                    best = Some(mv);
                } else if !maximizing && deeper.score < best_score {
                    best_score = deeper.score;
                    best = Some(mv);
                }
            }

            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
            if beta <= alpha {
                break;
            }
        }

        SearchOutcome {
            score: best_score,
            best,
        }
    }
}

impl fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchEngine")
            .field("mode", &self.mode.name())
            .field("strategy", &self.strategy)
            .field("memoized", &self.memo.len())
            .field("nodes", &self.nodes)
            .finish()
    }
}

//! Configuration types for match creation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, game::ModeKind, search::SearchStrategy};

/// Lower bound on the random pile count when none is configured.
pub const MIN_RANDOM_PILES: usize = 2;

/// Upper bound on the random pile count when none is configured.
pub const MAX_RANDOM_PILES: usize = 4;

/// Default upper bound on randomly drawn pile sizes.
pub const DEFAULT_MAX_PILE_SIZE: usize = 4;

/// Kind of move source to seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Human,
    Engine,
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(SourceKind::Human),
            "engine" | "ai" => Ok(SourceKind::Engine),
            _ => Err(Error::ParseSource {
                input: s.to_string(),
                expected: "human, engine",
            }),
        }
    }
}

/// Configuration for setting up a match.
///
/// Builder-style: start from a mode, override what the defaults get wrong.
///
/// # Examples
///
/// ```
/// use nim::app::MatchConfig;
/// use nim::game::ModeKind;
///
/// let config = MatchConfig::new(ModeKind::Misere)
///     .with_pile_sizes(vec![3, 4, 5])
///     .with_pruning(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Selected game variant
    pub mode: ModeKind,
    /// Number of piles; `None` draws 2–4 at random
    pub pile_count: Option<usize>,
    /// Explicit pile sizes; overrides `pile_count` and random draws
    pub pile_sizes: Option<Vec<usize>>,
    /// Upper bound for randomly drawn pile sizes (inclusive)
    pub max_pile_size: usize,
    /// Whether the engine seats use alpha-beta pruning
    pub pruning: bool,
    /// Random seed for reproducible setups
    pub seed: Option<u64>,
}

impl MatchConfig {
    pub fn new(mode: ModeKind) -> Self {
        MatchConfig {
            mode,
            pile_count: None,
            pile_sizes: None,
            max_pile_size: DEFAULT_MAX_PILE_SIZE,
            pruning: false,
            seed: None,
        }
    }

    pub fn with_pile_count(mut self, count: usize) -> Self {
        self.pile_count = Some(count);
        self
    }

    pub fn with_pile_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.pile_sizes = Some(sizes);
        self
    }

    pub fn with_max_pile_size(mut self, max: usize) -> Self {
        self.max_pile_size = max;
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The search strategy implied by the pruning flag.
    pub fn strategy(&self) -> SearchStrategy {
        if self.pruning {
            SearchStrategy::AlphaBeta
        } else {
            SearchStrategy::Exhaustive
        }
    }

    /// Check the bounds the engine assumes are already enforced.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] for fewer than two piles, an empty
    /// explicit pile, or a zero `max_pile_size`.
    pub fn validate(&self) -> Result<()> {
        if let Some(count) = self.pile_count
            && count < MIN_RANDOM_PILES
        {
            return Err(Error::InvalidConfiguration {
                message: format!("pile_count must be at least {MIN_RANDOM_PILES}, got {count}"),
            });
        }

        if let Some(sizes) = &self.pile_sizes {
            if sizes.len() < MIN_RANDOM_PILES {
                return Err(Error::InvalidConfiguration {
                    message: format!(
                        "at least {MIN_RANDOM_PILES} piles are required, got {}",
                        sizes.len()
                    ),
                });
            }
            if sizes.iter().any(|&size| size == 0) {
                return Err(Error::InvalidConfiguration {
                    message: "every initial pile must hold at least one object".to_string(),
                });
            }
        }

        if self.max_pile_size == 0 {
            return Err(Error::InvalidConfiguration {
                message: "max_pile_size must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

//! Wiring container for the nim application.
//!
//! Owns infrastructure choices (log directory, rotation cap, default seed)
//! and provides factory methods turning a [`MatchConfig`] into the pieces a
//! match needs: an initial position, a session logger, and move sources.

use std::path::{Path, PathBuf};

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::config::{MAX_RANDOM_PILES, MIN_RANDOM_PILES, MatchConfig, SourceKind};
use crate::{
    Result,
    adapters::{FileLogger, file_logger::DEFAULT_MAX_LOG_FILES},
    game::{ModeKind, PileState, Player},
    players::{EnginePlayer, HumanPlayer},
    ports::MoveSource,
    search::SearchStrategy,
};

/// Default directory for session logs.
pub const DEFAULT_LOG_DIR: &str = ".logs";

/// Application wiring with injectable infrastructure.
///
/// # Examples
///
/// ```
/// use nim::app::{App, MatchConfig};
/// use nim::game::ModeKind;
///
/// let app = App::new();
/// let config = MatchConfig::new(ModeKind::Classic).with_seed(7);
/// let piles = app.initial_piles(&config)?;
/// assert!(piles.pile_count() >= 2);
/// # Ok::<(), nim::Error>(())
/// ```
pub struct App {
    log_dir: PathBuf,
    max_log_files: usize,
    default_seed: Option<u64>,
}

impl App {
    /// Production defaults: `.logs` directory, ten retained session logs,
    /// non-deterministic setup.
    pub fn new() -> Self {
        App {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            max_log_files: DEFAULT_MAX_LOG_FILES,
            default_seed: None,
        }
    }

    /// Builder for tests and non-default deployments.
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Materialize the initial piles for a match.
    ///
    /// Explicit sizes win; otherwise the pile count (given or drawn 2–4)
    /// is filled with sizes drawn uniformly from `1..=max_pile_size`.
    pub fn initial_piles(&self, config: &MatchConfig) -> Result<PileState> {
        config.validate()?;

        if let Some(sizes) = &config.pile_sizes {
            return Ok(PileState::new(sizes.clone()));
        }

        let mut rng = match config.seed.or(self.default_seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };

        let pile_count = config
            .pile_count
            .unwrap_or_else(|| rng.random_range(MIN_RANDOM_PILES..=MAX_RANDOM_PILES));
        let sizes = (0..pile_count)
            .map(|_| rng.random_range(1..=config.max_pile_size))
            .collect();
        Ok(PileState::new(sizes))
    }

    /// Open a session log for the given mode.
    pub fn create_logger(&self, mode: ModeKind) -> Result<FileLogger> {
        FileLogger::create(&self.log_dir, mode.as_str(), self.max_log_files)
    }

    /// Seat a move source of the requested kind.
    pub fn create_source(
        &self,
        kind: SourceKind,
        seat: Player,
        mode: ModeKind,
        strategy: SearchStrategy,
    ) -> Box<dyn MoveSource> {
        match kind {
            SourceKind::Human => Box::new(HumanPlayer::new(seat.to_string())),
            SourceKind::Engine => {
                Box::new(EnginePlayer::new(seat.to_string(), mode.build(), strategy))
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing an [`App`] with custom infrastructure.
pub struct AppBuilder {
    log_dir: Option<PathBuf>,
    max_log_files: usize,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        AppBuilder {
            log_dir: None,
            max_log_files: DEFAULT_MAX_LOG_FILES,
            default_seed: None,
        }
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn with_max_log_files(mut self, max: usize) -> Self {
        self.max_log_files = max;
        self
    }

    /// Seed every randomized setup produced by this app.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    pub fn build(self) -> App {
        App {
            log_dir: self.log_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            max_log_files: self.max_log_files,
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_sizes_bypass_randomness() {
        let app = App::new();
        let config = MatchConfig::new(ModeKind::Classic).with_pile_sizes(vec![3, 1, 4]);
        let piles = app.initial_piles(&config).unwrap();
        assert_eq!(piles.sizes(), &[3, 1, 4]);
    }

    #[test]
    fn random_setup_respects_the_configured_bounds() {
        let app = App::builder().with_default_seed(7).build();
        let config = MatchConfig::new(ModeKind::Classic).with_max_pile_size(4);
        let piles = app.initial_piles(&config).unwrap();

        assert!((MIN_RANDOM_PILES..=MAX_RANDOM_PILES).contains(&piles.pile_count()));
        assert!(piles.sizes().iter().all(|&size| (1..=4).contains(&size)));
    }

    #[test]
    fn seeded_setups_are_reproducible() {
        let app = App::new();
        let config = MatchConfig::new(ModeKind::Misere).with_seed(42);
        let first = app.initial_piles(&config).unwrap();
        let second = app.initial_piles(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn config_seed_overrides_app_default() {
        let app = App::builder().with_default_seed(1).build();
        let config = MatchConfig::new(ModeKind::Classic).with_seed(2);
        let from_config = app.initial_piles(&config).unwrap();

        let plain = App::new();
        let expected = plain.initial_piles(&config).unwrap();
        assert_eq!(from_config, expected);
    }

    #[test]
    fn invalid_config_is_refused() {
        let app = App::new();
        let config = MatchConfig::new(ModeKind::Classic).with_pile_count(1);
        assert!(app.initial_piles(&config).is_err());
    }

    #[test]
    fn engine_source_is_seated_with_the_requested_strategy() {
        let app = App::new();
        let mut source = app.create_source(
            SourceKind::Engine,
            Player::Two,
            ModeKind::Classic,
            SearchStrategy::AlphaBeta,
        );
        assert_eq!(source.name(), "Player 2");
        let mv = source.propose_move(&PileState::new(vec![2, 2])).unwrap();
        assert!(PileState::new(vec![2, 2]).apply(mv).is_ok());
    }
}

//! Application layer: configuration and wiring
//!
//! The container owns infrastructure decisions (where logs go, how setups
//! are seeded) and hands the domain ready-made pieces, keeping the match
//! loop and search free of environment concerns.

pub mod config;
pub mod container;

pub use config::{MatchConfig, SourceKind};
pub use container::{App, AppBuilder};

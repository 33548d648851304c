//! Domain ports: traits the match loop depends on
//!
//! Concrete implementations live in `players` (move sources) and `adapters`
//! (loggers); the core only ever sees these interfaces.

pub mod match_logger;
pub mod move_source;

pub use match_logger::MatchLogger;
pub use move_source::MoveSource;

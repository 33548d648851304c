//! Export of game trees for external visualization

pub mod dot;
pub mod json;

pub use dot::{render_dot, write_dot};
pub use json::write_json;

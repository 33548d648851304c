//! CLI infrastructure for the nim toolkit
//!
//! Provides the command-line interface for playing matches, solving
//! positions, and analyzing game trees.

pub mod commands;
pub mod output;

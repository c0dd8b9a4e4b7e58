//! Internal modules for the terminal darts scorer.
//!
//! This library provides configuration loading, command parsing, board
//! hit-testing, scoreboard rendering and the input session used by the
//! ds_client binary.

pub mod board;
pub mod commands;
pub mod config;
pub mod render;
pub mod session;

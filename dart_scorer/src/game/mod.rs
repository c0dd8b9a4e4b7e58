//! Darts scoring engine - throw rules and the match state machine.
//!
//! This module provides:
//! - Pure scoring rules for single darts and whole rounds
//! - Match configuration (starting score, players, input mode)
//! - The match state machine with bust and checkout handling
//! - Events and read-only views for collaborators

pub mod config;
pub mod constants;
pub mod entities;
pub mod errors;
pub mod functional;
pub mod state_machine;

pub use config::{InputMode, MatchConfig, StartingScore};
pub use errors::{MatchError, MatchResult};
pub use state_machine::{MatchEvent, MatchState, RoundOutcome};

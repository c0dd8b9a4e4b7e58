//! Match error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{Points, Throw};

/// Errors that can occur while setting up or playing a match.
///
/// Every operation that returns one of these leaves the match untouched.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum MatchError {
    #[error("maximum {max} darts per round")]
    RoundFull { max: usize },
    #[error("{0} can't be thrown")]
    InvalidThrow(Throw),
    #[error("maximum possible score is {max}")]
    ManualScoreTooHigh { score: Points, max: Points },
    #[error("no game in progress")]
    NotInProgress,
    #[error("no game configured")]
    NotConfigured,
    #[error("need 1+ players")]
    NoPlayers,
    #[error("player names can't be blank")]
    BlankPlayerName,
    #[error("{0} is already playing")]
    DuplicatePlayerName(String),
    #[error("{0} isn't a starting score (101, 301, 501, 701)")]
    InvalidStartingScore(Points),
    #[error("unknown input mode '{0}'")]
    InvalidInputMode(String),
}

/// Result type for match operations
pub type MatchResult<T> = Result<T, MatchError>;

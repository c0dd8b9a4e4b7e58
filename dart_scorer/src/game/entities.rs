use serde::{Deserialize, Serialize};
use std::fmt;

use super::{config::MatchConfig, constants};

/// Type alias for points. Scores never go negative, and the largest
/// starting score fits comfortably.
pub type Points = u32;

/// Ring a dart landed in.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Multiplier {
    Single,
    Double,
    Triple,
}

impl Multiplier {
    #[must_use]
    pub const fn factor(self) -> Points {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }

    #[must_use]
    pub const fn from_factor(factor: u8) -> Option<Self> {
        match factor {
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            3 => Some(Self::Triple),
            _ => None,
        }
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Single => "S",
            Self::Double => "D",
            Self::Triple => "T",
        };
        write!(f, "{repr}")
    }
}

/// A single dart. The score is always `value * multiplier`; it's computed
/// on construction and recomputed on deserialization.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "ThrowRepr")]
pub struct Throw {
    value: u8,
    multiplier: Multiplier,
    score: Points,
}

impl Throw {
    /// Doesn't check whether the dart is possible. See
    /// [`validate_throw`](super::functional::validate_throw).
    #[must_use]
    pub const fn new(value: u8, multiplier: Multiplier) -> Self {
        Self {
            value,
            multiplier,
            score: value as Points * multiplier.factor(),
        }
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub const fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    #[must_use]
    pub const fn score(&self) -> Points {
        self.score
    }

    #[must_use]
    pub const fn is_bull(&self) -> bool {
        self.value == constants::BULL
    }
}

impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_bull(), self.multiplier) {
            (true, Multiplier::Single) => write!(f, "25"),
            (true, Multiplier::Double) => write!(f, "BULL"),
            _ => write!(f, "{}{}", self.multiplier, self.value),
        }
    }
}

#[derive(Deserialize)]
struct ThrowRepr {
    value: u8,
    multiplier: Multiplier,
}

impl From<ThrowRepr> for Throw {
    fn from(value: ThrowRepr) -> Self {
        Self::new(value.value, value.multiplier)
    }
}

/// Up to three darts thrown by one player in one turn.
///
/// Rounds built dart by dart keep `total_score` equal to the sum of their
/// throws. Manually entered rounds carry a total and no throws.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Round {
    throws: Vec<Throw>,
    total_score: Points,
}

impl Round {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A round entered as a single total, without individual darts.
    #[must_use]
    pub fn manual(total_score: Points) -> Self {
        Self {
            throws: Vec::new(),
            total_score,
        }
    }

    #[must_use]
    pub fn throws(&self) -> &[Throw] {
        &self.throws
    }

    #[must_use]
    pub fn total_score(&self) -> Points {
        self.total_score
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.throws.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.throws.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.throws.len() >= constants::MAX_THROWS_PER_ROUND
    }

    #[must_use]
    pub fn last_throw(&self) -> Option<&Throw> {
        self.throws.last()
    }

    pub(crate) fn push(&mut self, throw: Throw) {
        self.total_score += throw.score();
        self.throws.push(throw);
    }

    pub(crate) fn pop(&mut self) -> Option<Throw> {
        let throw = self.throws.pop()?;
        self.total_score -= throw.score();
        Some(throw)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.throws.is_empty() {
            return write!(f, "{}", self.total_score);
        }
        let darts = self
            .throws
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{darts} = {}", self.total_score)
    }
}

/// Stable player identifier derived from the player's position in the
/// match config, so restarting a match reproduces the same ids.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct PlayerId(pub usize);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Points left to check out. Only ever decreases.
    pub current_score: Points,
    /// Committed rounds. Busts never make it in here.
    pub rounds: Vec<Round>,
    pub has_won: bool,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: &str, starting_score: Points) -> Self {
        Self {
            id,
            name: name.to_string(),
            current_score: starting_score,
            rounds: Vec::new(),
            has_won: false,
        }
    }

    /// Sum of all committed rounds.
    #[must_use]
    pub fn points_scored(&self) -> Points {
        self.rounds.iter().map(Round::total_score).sum()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.current_score)
    }
}

/// Coarse lifecycle of a match.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Finished => "finished",
        };
        write!(f, "{repr}")
    }
}

/// Read-only snapshot of a match for collaborators that render it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MatchView {
    pub phase: MatchPhase,
    pub config: Option<MatchConfig>,
    pub players: Vec<Player>,
    pub current_player_idx: usize,
    pub active_round: Round,
    pub winner: Option<PlayerId>,
}

impl MatchView {
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_idx)
    }
}

//! Match configuration models.

use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

use super::{entities::Points, errors::MatchError};

/// Supported x01 games, named after the score each player starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Points", into = "Points")]
pub enum StartingScore {
    Game101,
    #[default]
    Game301,
    Game501,
    Game701,
}

impl StartingScore {
    pub const ALL: [Self; 4] = [Self::Game101, Self::Game301, Self::Game501, Self::Game701];

    #[must_use]
    pub const fn points(self) -> Points {
        match self {
            Self::Game101 => 101,
            Self::Game301 => 301,
            Self::Game501 => 501,
            Self::Game701 => 701,
        }
    }
}

impl TryFrom<Points> for StartingScore {
    type Error = MatchError;

    fn try_from(value: Points) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|score| score.points() == value)
            .ok_or(MatchError::InvalidStartingScore(value))
    }
}

impl From<StartingScore> for Points {
    fn from(value: StartingScore) -> Self {
        value.points()
    }
}

impl FromStr for StartingScore {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let points = s
            .trim()
            .parse::<Points>()
            .map_err(|_| MatchError::InvalidStartingScore(0))?;
        Self::try_from(points)
    }
}

impl fmt::Display for StartingScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

/// Which collaborator drives throw entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Whole-round totals typed on a number pad.
    #[default]
    Calculating,
    /// Individual darts picked by segment and ring.
    Input,
    /// Darts located by where they hit the board.
    Touch,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Calculating => write!(f, "calculating"),
            InputMode::Input => write!(f, "input"),
            InputMode::Touch => write!(f, "touch"),
        }
    }
}

impl FromStr for InputMode {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calculating" => Ok(Self::Calculating),
            "input" => Ok(Self::Input),
            "touch" => Ok(Self::Touch),
            other => Err(MatchError::InvalidInputMode(other.to_string())),
        }
    }
}

/// Match configuration. Fixed for the life of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Score every player starts from
    pub starting_score: StartingScore,

    /// Player names in turn order
    pub player_names: Vec<String>,

    /// Collaborator used for throw entry
    pub input_mode: InputMode,
}

impl MatchConfig {
    /// Build a validated config. Names are trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no names, a name is blank, or a name
    /// appears twice.
    pub fn new<I, S>(
        starting_score: StartingScore,
        player_names: I,
        input_mode: InputMode,
    ) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let config = Self {
            starting_score,
            player_names: player_names
                .into_iter()
                .map(|name| name.as_ref().trim().to_string())
                .collect(),
            input_mode,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Same conditions as [`MatchConfig::new`], without trimming.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.player_names.is_empty() {
            return Err(MatchError::NoPlayers);
        }

        let mut seen = HashSet::with_capacity(self.player_names.len());
        for name in &self.player_names {
            if name.trim().is_empty() {
                return Err(MatchError::BlankPlayerName);
            }
            if !seen.insert(name.as_str()) {
                return Err(MatchError::DuplicatePlayerName(name.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === StartingScore Tests ===

    #[test]
    fn test_starting_score_points() {
        let points: Vec<Points> = StartingScore::ALL.iter().map(|s| s.points()).collect();
        assert_eq!(points, vec![101, 301, 501, 701]);
    }

    #[test]
    fn test_starting_score_try_from() {
        assert_eq!(StartingScore::try_from(501), Ok(StartingScore::Game501));
        assert_eq!(
            StartingScore::try_from(401),
            Err(MatchError::InvalidStartingScore(401))
        );
    }

    #[test]
    fn test_starting_score_from_str() {
        assert_eq!(" 701 ".parse::<StartingScore>(), Ok(StartingScore::Game701));
        assert!("abc".parse::<StartingScore>().is_err());
    }

    #[test]
    fn test_starting_score_serializes_as_number() {
        let json = serde_json::to_string(&StartingScore::Game101).unwrap();
        assert_eq!(json, "101");
        let parsed: StartingScore = serde_json::from_str("301").unwrap();
        assert_eq!(parsed, StartingScore::Game301);
        assert!(serde_json::from_str::<StartingScore>("300").is_err());
    }

    // === InputMode Tests ===

    #[test]
    fn test_input_mode_round_trip_display() {
        for mode in [InputMode::Calculating, InputMode::Input, InputMode::Touch] {
            assert_eq!(mode.to_string().parse::<InputMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_input_mode_case_insensitive() {
        assert_eq!("TOUCH".parse::<InputMode>(), Ok(InputMode::Touch));
        assert_eq!(
            "keyboard".parse::<InputMode>(),
            Err(MatchError::InvalidInputMode("keyboard".to_string()))
        );
    }

    // === MatchConfig Tests ===

    #[test]
    fn test_config_trims_names() {
        let config =
            MatchConfig::new(StartingScore::Game501, ["  alice ", "bob"], InputMode::Input)
                .unwrap();
        assert_eq!(config.player_names, vec!["alice", "bob"]);
    }

    #[test]
    fn test_config_rejects_empty() {
        let names: [&str; 0] = [];
        let result = MatchConfig::new(StartingScore::Game301, names, InputMode::Calculating);
        assert_eq!(result, Err(MatchError::NoPlayers));
    }

    #[test]
    fn test_config_rejects_blank_name() {
        let result = MatchConfig::new(
            StartingScore::Game301,
            ["alice", "   "],
            InputMode::Calculating,
        );
        assert_eq!(result, Err(MatchError::BlankPlayerName));
    }

    #[test]
    fn test_config_rejects_duplicate_name() {
        let result = MatchConfig::new(
            StartingScore::Game301,
            ["alice", " alice"],
            InputMode::Calculating,
        );
        assert_eq!(
            result,
            Err(MatchError::DuplicatePlayerName("alice".to_string()))
        );
    }
}

//! Client configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use dart_scorer::{InputMode, MatchConfig, MatchError, StartingScore};

pub const STARTING_SCORE_VAR: &str = "DARTS_STARTING_SCORE";
pub const PLAYERS_VAR: &str = "DARTS_PLAYERS";
pub const INPUT_MODE_VAR: &str = "DARTS_INPUT_MODE";

/// Values given on the command line. These win over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub starting_score: Option<String>,
    pub players: Option<String>,
    pub input_mode: Option<String>,
}

/// Complete client configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Score every player starts from
    pub starting_score: StartingScore,
    /// Player names in turn order. May be empty, in which case the
    /// client asks for them.
    pub player_names: Vec<String>,
    /// How darts are entered
    pub input_mode: InputMode,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if a starting score or input mode is set but invalid
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_env`].
    pub fn from_lookup<F>(overrides: ConfigOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let starting_score = match overrides
            .starting_score
            .or_else(|| lookup(STARTING_SCORE_VAR))
        {
            Some(raw) => raw
                .parse::<StartingScore>()
                .map_err(|_| ConfigError::Invalid {
                    var: STARTING_SCORE_VAR.to_string(),
                    reason: format!("'{raw}' must be one of 101, 301, 501, 701"),
                })?,
            None => StartingScore::default(),
        };

        let input_mode = match overrides.input_mode.or_else(|| lookup(INPUT_MODE_VAR)) {
            Some(raw) => raw.parse::<InputMode>().map_err(|_| ConfigError::Invalid {
                var: INPUT_MODE_VAR.to_string(),
                reason: format!("'{raw}' must be calculating, input or touch"),
            })?,
            None => InputMode::default(),
        };

        let player_names = overrides
            .players
            .or_else(|| lookup(PLAYERS_VAR))
            .map(|raw| split_names(&raw))
            .unwrap_or_default();

        Ok(ClientConfig {
            starting_score,
            player_names,
            input_mode,
        })
    }

    /// Validate configuration and turn it into a match config
    ///
    /// # Errors
    ///
    /// Returns error if there are no players or a name appears twice
    pub fn validate(&self) -> Result<MatchConfig, ConfigError> {
        MatchConfig::new(self.starting_score, &self.player_names, self.input_mode).map_err(
            |err| ConfigError::Invalid {
                var: PLAYERS_VAR.to_string(),
                reason: err.to_string(),
            },
        )
    }
}

/// Split a comma-separated list of names, dropping blanks.
#[must_use]
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error(transparent)]
    Match(#[from] MatchError),
}

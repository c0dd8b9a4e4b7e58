//! Match state machine.
//!
//! A [`MatchState`] owns everything that changes during a match: the
//! players, whose turn it is, the round being thrown, and whether someone
//! has checked out. Collaborators hold the state and call into it; they
//! read it back through accessors, [`MatchState::view`] snapshots, or the
//! event queue.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, fmt, mem};

use super::{
    config::MatchConfig,
    constants::{MAX_ROUND_SCORE, MAX_THROWS_PER_ROUND},
    entities::{MatchPhase, MatchView, Player, PlayerId, Points, Round, Throw},
    errors::MatchError,
    functional,
};

/// Events that occur during a match
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MatchEvent {
    Started {
        players: usize,
        starting_score: Points,
    },
    ThrowAdded {
        player: String,
        throw: Throw,
    },
    ThrowUndone {
        player: String,
        throw: Throw,
    },
    RoundCleared,
    RoundScored {
        player: String,
        score: Points,
        remaining: Points,
    },
    Bust {
        player: String,
        attempted: Points,
        remaining: Points,
    },
    Won(String),
    Reset,
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Started {
                players,
                starting_score,
            } => format!("{starting_score} started with {players} player(s)"),
            Self::ThrowAdded { player, throw } => format!("{player} threw {throw}"),
            Self::ThrowUndone { player, throw } => format!("{player} took back {throw}"),
            Self::RoundCleared => "round cleared".to_string(),
            Self::RoundScored {
                player,
                score,
                remaining,
            } => format!("{player} scored {score}, {remaining} left"),
            Self::Bust {
                player,
                attempted,
                remaining,
            } => format!("{player} busted with {attempted} on {remaining}"),
            Self::Won(player) => format!("{player} won the game"),
            Self::Reset => "game reset".to_string(),
        };
        write!(f, "{repr}")
    }
}

/// What happened to a submitted round.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RoundOutcome {
    /// Round recorded; the turn moved on.
    Scored { remaining: Points },
    /// Round would have gone below zero. Nothing recorded; the turn moved on.
    Bust,
    /// Round hit exactly zero. The match is over.
    Won,
}

/// A darts match with data and logic for scoring it end-to-end.
#[derive(Debug, Default)]
pub struct MatchState {
    config: Option<MatchConfig>,
    players: Vec<Player>,
    current_player_idx: usize,
    /// The round being thrown. Not part of any player's history until
    /// it's submitted.
    active_round: Round,
    phase: MatchPhase,
    /// Index into `players`.
    winner: Option<usize>,
    /// Queue of events for collaborators to render. Drained, never read
    /// back by the state machine.
    events: VecDeque<MatchEvent>,
}

impl MatchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh match, replacing whatever was there before.
    ///
    /// # Errors
    ///
    /// Returns an error if the config has no players or has blank or
    /// duplicate names. The current match is left as is.
    pub fn start_game(&mut self, config: MatchConfig) -> Result<(), MatchError> {
        config.validate()?;

        let starting_score = config.starting_score.points();
        self.players = config
            .player_names
            .iter()
            .enumerate()
            .map(|(idx, name)| Player::new(PlayerId(idx), name, starting_score))
            .collect();
        self.current_player_idx = 0;
        self.active_round = Round::new();
        self.phase = MatchPhase::InProgress;
        self.winner = None;

        info!(
            "starting {starting_score} with {} player(s) in {} mode",
            self.players.len(),
            config.input_mode
        );
        self.events.push_back(MatchEvent::Started {
            players: self.players.len(),
            starting_score,
        });
        self.config = Some(config);
        Ok(())
    }

    /// Start over with the current config.
    ///
    /// # Errors
    ///
    /// Returns an error if no match has been configured.
    pub fn rematch(&mut self) -> Result<(), MatchError> {
        let config = self.config.clone().ok_or(MatchError::NotConfigured)?;
        self.start_game(config)
    }

    /// Add a dart to the active round.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the round untouched, if no match is in
    /// progress, the round already has three darts, or the dart can't be
    /// thrown.
    pub fn add_throw(&mut self, throw: Throw) -> Result<(), MatchError> {
        self.ensure_in_progress()?;

        if self.active_round.is_full() {
            warn!("rejected {throw}: round already has {MAX_THROWS_PER_ROUND} darts");
            return Err(MatchError::RoundFull {
                max: MAX_THROWS_PER_ROUND,
            });
        }

        if !functional::validate_throw(&throw) {
            warn!("rejected {throw}: not a dart that can be thrown");
            return Err(MatchError::InvalidThrow(throw));
        }

        self.active_round.push(throw);
        let player = self.current_player_name();
        debug!(
            "{player} threw {throw}, round total {}",
            self.active_round.total_score()
        );
        self.events
            .push_back(MatchEvent::ThrowAdded { player, throw });
        Ok(())
    }

    /// Take back the last dart of the active round.
    pub fn undo_throw(&mut self) -> Option<Throw> {
        if self.phase != MatchPhase::InProgress {
            return None;
        }

        let throw = self.active_round.pop()?;
        let player = self.current_player_name();
        debug!("{player} took back {throw}");
        self.events
            .push_back(MatchEvent::ThrowUndone { player, throw });
        Some(throw)
    }

    pub fn clear_current_round(&mut self) {
        self.active_round = Round::new();
        self.events.push_back(MatchEvent::RoundCleared);
    }

    /// Commit the active round against the current player.
    ///
    /// # Errors
    ///
    /// Returns an error if no match is in progress.
    pub fn submit_round(&mut self) -> Result<RoundOutcome, MatchError> {
        self.ensure_in_progress()?;
        let round = self.active_round.clone();
        self.commit(round)
    }

    /// Commit a round entered as a single total, bypassing individual
    /// darts. Busts and checkouts work exactly as in
    /// [`submit_round`](Self::submit_round), and any darts already in the
    /// active round are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if no match is in progress or the score is above
    /// what three darts can make.
    pub fn submit_manual_score(&mut self, score: Points) -> Result<RoundOutcome, MatchError> {
        self.ensure_in_progress()?;

        if score > MAX_ROUND_SCORE {
            warn!("rejected manual score {score}");
            return Err(MatchError::ManualScoreTooHigh {
                score,
                max: MAX_ROUND_SCORE,
            });
        }

        self.commit(Round::manual(score))
    }

    /// Wipe the match back to its unconfigured state.
    pub fn reset_game(&mut self) {
        *self = Self::default();
        info!("game reset");
        self.events.push_back(MatchEvent::Reset);
    }

    #[must_use]
    pub fn config(&self) -> Option<&MatchConfig> {
        self.config.as_ref()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn current_player_idx(&self) -> usize {
        self.current_player_idx
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_idx)
    }

    #[must_use]
    pub fn active_round(&self) -> &Round {
        &self.active_round
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != MatchPhase::NotStarted
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == MatchPhase::Finished
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|idx| self.players.get(idx))
    }

    /// Snapshot of the match for rendering.
    #[must_use]
    pub fn view(&self) -> MatchView {
        MatchView {
            phase: self.phase,
            config: self.config.clone(),
            players: self.players.clone(),
            current_player_idx: self.current_player_idx,
            active_round: self.active_round.clone(),
            winner: self.winner().map(|player| player.id),
        }
    }

    pub fn drain_events(&mut self) -> VecDeque<MatchEvent> {
        mem::take(&mut self.events)
    }

    fn ensure_in_progress(&self) -> Result<(), MatchError> {
        if self.phase == MatchPhase::InProgress {
            Ok(())
        } else {
            Err(MatchError::NotInProgress)
        }
    }

    fn current_player_name(&self) -> String {
        self.current_player()
            .map(|player| player.name.clone())
            .unwrap_or_default()
    }

    /// Apply a round to the current player. Busts and regular rounds reset
    /// the active round and pass the turn; a checkout freezes the match
    /// with the turn still on the winner.
    fn commit(&mut self, round: Round) -> Result<RoundOutcome, MatchError> {
        let idx = self.current_player_idx;
        let player = self.players.get_mut(idx).ok_or(MatchError::NoPlayers)?;
        let score = round.total_score();

        if !functional::can_subtract_score(player.current_score, score) {
            info!(
                "{} busted with {score} on {}",
                player.name, player.current_score
            );
            let event = MatchEvent::Bust {
                player: player.name.clone(),
                attempted: score,
                remaining: player.current_score,
            };
            self.events.push_back(event);
            self.active_round = Round::new();
            self.next_player();
            return Ok(RoundOutcome::Bust);
        }

        let remaining = player.current_score - score;
        let has_won = functional::check_win_condition(remaining, round.last_throw());
        player.current_score = remaining;
        player.rounds.push(round);
        player.has_won = has_won;
        debug!("{} scored {score}, {remaining} left", player.name);

        let name = player.name.clone();
        self.events.push_back(MatchEvent::RoundScored {
            player: name.clone(),
            score,
            remaining,
        });

        if has_won {
            info!("{name} checked out");
            self.phase = MatchPhase::Finished;
            self.winner = Some(idx);
            self.events.push_back(MatchEvent::Won(name));
            return Ok(RoundOutcome::Won);
        }

        self.active_round = Round::new();
        self.next_player();
        Ok(RoundOutcome::Scored { remaining })
    }

    fn next_player(&mut self) {
        if !self.players.is_empty() {
            self.current_player_idx = (self.current_player_idx + 1) % self.players.len();
        }
    }
}

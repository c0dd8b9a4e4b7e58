//! # Dart Scorer
//!
//! A turn-based darts scoring engine for x01 games (101, 301, 501, 701).
//!
//! The engine tracks players, accumulates the darts of the round being
//! thrown, detects busts and checkouts, and passes the turn. It does no
//! I/O; input collaborators (number pads, segment pickers, dartboard
//! hit-tests) build throws and scores and feed them in.
//!
//! ## Rules
//!
//! - A round is up to three darts. Numbered segments 1-20 score single,
//!   double or triple; the bull scores 25 or 50 and has no triple.
//! - A round that would take a player below zero is a bust: it isn't
//!   recorded and the turn passes.
//! - Hitting exactly zero wins and ends the match. There's no double-out.
//!
//! ## Core Modules
//!
//! - [`game::functional`]: Throw validation and score arithmetic
//! - [`game::state_machine`]: The match state machine
//!
//! ## Example
//!
//! ```
//! use dart_scorer::{
//!     InputMode, MatchConfig, MatchState, RoundOutcome, StartingScore,
//!     entities::Multiplier, functional::create_throw,
//! };
//!
//! let config = MatchConfig::new(StartingScore::Game301, ["alice", "bob"], InputMode::Input)?;
//! let mut game = MatchState::new();
//! game.start_game(config)?;
//!
//! game.add_throw(create_throw(20, Multiplier::Triple))?;
//! assert_eq!(game.submit_round()?, RoundOutcome::Scored { remaining: 241 });
//! assert_eq!(game.current_player().map(|p| p.name.as_str()), Some("bob"));
//! # Ok::<(), dart_scorer::MatchError>(())
//! ```

/// Scoring rules, entities, and the match state machine.
pub mod game;
pub use game::{
    InputMode, MatchConfig, MatchError, MatchEvent, MatchResult, MatchState, RoundOutcome,
    StartingScore,
    constants::{self, BOARD_ORDER, BULL, MAX_ROUND_SCORE, MAX_THROWS_PER_ROUND},
    entities::{self, MatchView, Multiplier, Player, PlayerId, Points, Round, Throw},
    functional,
};

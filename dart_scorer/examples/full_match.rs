//! Full Match Example
//!
//! Plays a short 101 game between two players, mixing dart-by-dart rounds
//! with manually entered totals.

use dart_scorer::{
    InputMode, MatchConfig, MatchState, RoundOutcome, StartingScore,
    entities::Multiplier,
    functional::{create_throw, validate_throw},
};

fn main() -> Result<(), dart_scorer::MatchError> {
    println!("=== 101 Example ===\n");

    let config = MatchConfig::new(StartingScore::Game101, ["alice", "bob"], InputMode::Input)?;
    let mut game = MatchState::new();
    game.start_game(config)?;

    // Alice: T20, S1 -> 40 left
    for (value, multiplier) in [(20, Multiplier::Triple), (1, Multiplier::Single)] {
        let throw = create_throw(value, multiplier);
        assert!(validate_throw(&throw));
        game.add_throw(throw)?;
    }
    let outcome = game.submit_round()?;
    report(&mut game, outcome);

    // Bob enters a total instead of darts.
    let outcome = game.submit_manual_score(85)?;
    report(&mut game, outcome);

    // Alice busts: 45 on 40.
    game.add_throw(create_throw(15, Multiplier::Triple))?;
    let outcome = game.submit_round()?;
    report(&mut game, outcome);

    // Bob misses everything.
    let outcome = game.submit_round()?;
    report(&mut game, outcome);

    // Alice checks out on double 20.
    game.add_throw(create_throw(20, Multiplier::Double))?;
    let outcome = game.submit_round()?;
    report(&mut game, outcome);

    if let Some(winner) = game.winner() {
        println!("\nWinner: {} after {} round(s)", winner.name, winner.rounds.len());
    }

    Ok(())
}

fn report(game: &mut MatchState, outcome: RoundOutcome) {
    for event in game.drain_events() {
        println!("{event}");
    }
    println!("  -> {outcome:?}");
}

//! Property-based tests for throw scoring and match bookkeeping using proptest
//!
//! These tests drive the engine with randomly generated darts and round
//! sequences and check that its invariants hold whatever is thrown at it.

use dart_scorer::{
    InputMode, MatchConfig, MatchState, RoundOutcome, StartingScore,
    entities::{Multiplier, Points, Throw},
    functional::{calculate_round_score, can_subtract_score, create_throw, validate_throw},
};
use proptest::prelude::*;

fn multiplier_strategy() -> impl Strategy<Value = Multiplier> {
    prop_oneof![
        Just(Multiplier::Single),
        Just(Multiplier::Double),
        Just(Multiplier::Triple),
    ]
}

// Strategy to generate a dart that could land on a real board
fn valid_throw_strategy() -> impl Strategy<Value = Throw> {
    prop_oneof![
        (1u8..=20, multiplier_strategy()).prop_map(|(v, m)| create_throw(v, m)),
        prop_oneof![Just(Multiplier::Single), Just(Multiplier::Double)]
            .prop_map(|m| create_throw(25, m)),
    ]
}

// Strategy to generate any dart, possible or not
fn any_throw_strategy() -> impl Strategy<Value = Throw> {
    (any::<u8>(), multiplier_strategy()).prop_map(|(v, m)| create_throw(v, m))
}

fn starting_score_strategy() -> impl Strategy<Value = StartingScore> {
    prop::sample::select(StartingScore::ALL.to_vec())
}

fn start(n_players: usize, starting_score: StartingScore) -> MatchState {
    let names: Vec<String> = (0..n_players).map(|i| format!("p{i}")).collect();
    let config = MatchConfig::new(starting_score, &names, InputMode::Input).unwrap();
    let mut game = MatchState::new();
    game.start_game(config).unwrap();
    game
}

proptest! {
    #[test]
    fn test_score_is_value_times_multiplier(throw in any_throw_strategy()) {
        prop_assert_eq!(
            throw.score(),
            Points::from(throw.value()) * throw.multiplier().factor()
        );
    }

    #[test]
    fn test_valid_throws_validate(throw in valid_throw_strategy()) {
        prop_assert!(validate_throw(&throw));
    }

    #[test]
    fn test_validation_matches_board(throw in any_throw_strategy()) {
        let on_board = (1..=20).contains(&throw.value())
            || (throw.value() == 25 && throw.multiplier() != Multiplier::Triple);
        prop_assert_eq!(validate_throw(&throw), on_board);
    }

    #[test]
    fn test_can_subtract_matches_signed_arithmetic(current in 0u32..1000, round in 0u32..=180) {
        let signed = i64::from(current) - i64::from(round);
        prop_assert_eq!(can_subtract_score(current, round), signed >= 0);
    }

    #[test]
    fn test_active_round_never_exceeds_three(
        throws in prop::collection::vec(any_throw_strategy(), 0..10)
    ) {
        let mut game = start(2, StartingScore::Game501);
        for throw in throws {
            let before = game.active_round().clone();
            if game.add_throw(throw).is_err() {
                prop_assert_eq!(game.active_round(), &before);
            }
            prop_assert!(game.active_round().len() <= 3);
            prop_assert_eq!(
                calculate_round_score(game.active_round()),
                game.active_round().total_score()
            );
        }
    }

    #[test]
    fn test_scores_never_increase(
        starting_score in starting_score_strategy(),
        n_players in 1usize..=4,
        rounds in prop::collection::vec(prop::collection::vec(valid_throw_strategy(), 0..=3), 1..40)
    ) {
        let mut game = start(n_players, starting_score);

        for darts in rounds {
            if game.is_finished() {
                break;
            }
            let idx = game.current_player_idx();
            let before = game.players()[idx].clone();

            for throw in darts {
                game.add_throw(throw).unwrap();
            }
            let attempted = game.active_round().total_score();
            let outcome = game.submit_round().unwrap();
            let after = &game.players()[idx];

            prop_assert!(after.current_score <= before.current_score);
            match outcome {
                RoundOutcome::Bust => {
                    prop_assert!(attempted > before.current_score);
                    prop_assert_eq!(after, &before);
                    prop_assert_eq!(game.current_player_idx(), (idx + 1) % n_players);
                }
                RoundOutcome::Scored { remaining } => {
                    prop_assert_eq!(remaining, before.current_score - attempted);
                    prop_assert_eq!(after.rounds.len(), before.rounds.len() + 1);
                    prop_assert_eq!(game.current_player_idx(), (idx + 1) % n_players);
                }
                RoundOutcome::Won => {
                    prop_assert_eq!(after.current_score, 0);
                    prop_assert!(after.has_won);
                    prop_assert!(game.is_finished());
                    prop_assert_eq!(game.current_player_idx(), idx);
                }
            }
        }

        for player in game.players() {
            let committed: Points = player.rounds.iter().map(|r| r.total_score()).sum();
            prop_assert_eq!(player.current_score + committed, starting_score.points());
        }
    }

    #[test]
    fn test_at_most_one_winner(
        scores in prop::collection::vec(0u32..=180, 1..60)
    ) {
        let mut game = start(3, StartingScore::Game101);
        for score in scores {
            if game.submit_manual_score(score).is_err() {
                prop_assert!(game.is_finished());
            }
        }
        let winners = game.players().iter().filter(|p| p.has_won).count();
        prop_assert!(winners <= 1);
        prop_assert_eq!(winners == 1, game.winner().is_some());
    }
}

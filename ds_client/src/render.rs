//! Plain-text scoreboard rendering.

use dart_scorer::{
    MAX_THROWS_PER_ROUND, MatchView,
    entities::{MatchPhase, Player},
};

/// Width every scoreboard cell is padded to.
pub const CELL_WIDTH: usize = 30;

const NAME_WIDTH: usize = 14;

/// Number of scoreboard columns for a given number of players.
#[must_use]
pub fn scoreboard_columns(players: usize) -> usize {
    match players {
        0..=2 => 1,
        3..=4 => 2,
        5..=6 => 3,
        _ => 4,
    }
}

/// Render the header and one cell per player, laid out in rows.
///
/// The player whose turn it is gets a `>` and the winner a `*`.
#[must_use]
pub fn render_scoreboard(view: &MatchView) -> String {
    let Some(config) = &view.config else {
        return "No game in progress. Enter player names to start.".to_string();
    };

    let mut lines = vec![format!(
        "== {} | {} mode | {} ==",
        config.starting_score, config.input_mode, view.phase
    )];

    let columns = scoreboard_columns(view.players.len());
    let cells: Vec<String> = view
        .players
        .iter()
        .enumerate()
        .map(|(idx, player)| player_cell(view, idx, player))
        .collect();

    for row in cells.chunks(columns) {
        let line: String = row
            .iter()
            .map(|cell| format!("{cell:<CELL_WIDTH$}"))
            .collect();
        lines.push(line.trim_end().to_string());
    }

    if let Some(winner) = view.winner.and_then(|id| view.players.get(id.0)) {
        lines.push(format!("{} wins!", winner.name));
    }

    lines.join("\n")
}

/// Prompt showing whose turn it is and the darts thrown so far.
#[must_use]
pub fn render_prompt(view: &MatchView) -> String {
    match (view.phase, view.current_player()) {
        (MatchPhase::InProgress, Some(player)) => {
            let round = &view.active_round;
            if round.is_empty() {
                format!("{} ({}) > ", player.name, player.current_score)
            } else {
                format!(
                    "{} ({}) [{} | {}/{}] > ",
                    player.name,
                    player.current_score,
                    round,
                    round.len(),
                    MAX_THROWS_PER_ROUND
                )
            }
        }
        (MatchPhase::Finished, _) => "rematch / reset / quit > ".to_string(),
        _ => "players > ".to_string(),
    }
}

fn player_cell(view: &MatchView, idx: usize, player: &Player) -> String {
    let marker = if player.has_won {
        '*'
    } else if view.phase == MatchPhase::InProgress && idx == view.current_player_idx {
        '>'
    } else {
        ' '
    };

    let last = player
        .rounds
        .last()
        .map(|round| format!(" (last {})", round.total_score()))
        .unwrap_or_default();

    let name: String = player.name.chars().take(NAME_WIDTH).collect();
    format!(
        "{marker} {name:<NAME_WIDTH$} {:>3}{last}",
        player.current_score
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use dart_scorer::{
        InputMode, MatchConfig, MatchState, Multiplier, StartingScore, functional::create_throw,
    };

    fn started(names: &[&str]) -> MatchState {
        let config = MatchConfig::new(StartingScore::Game301, names, InputMode::Input).unwrap();
        let mut game = MatchState::new();
        game.start_game(config).unwrap();
        game
    }

    // === Layout Tests ===

    #[test]
    fn test_scoreboard_columns() {
        let columns: Vec<usize> = (1..=9).map(scoreboard_columns).collect();
        assert_eq!(columns, vec![1, 1, 2, 2, 3, 3, 4, 4, 4]);
    }

    #[test]
    fn test_render_not_started() {
        let game = MatchState::new();
        assert!(render_scoreboard(&game.view()).starts_with("No game in progress"));
    }

    #[test]
    fn test_render_rows_follow_columns() {
        let game = started(&["a", "b", "c", "d", "e"]);
        let board = render_scoreboard(&game.view());
        let lines: Vec<&str> = board.lines().collect();
        // header + two rows of three
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("301"));
        assert!(lines[1].contains(" a ") && lines[1].contains(" c "));
        assert!(lines[2].contains(" e "));
    }

    // === Marker Tests ===

    #[test]
    fn test_render_marks_current_player() {
        let mut game = started(&["alice", "bob"]);
        game.submit_manual_score(60).unwrap();
        let board = render_scoreboard(&game.view());
        assert!(board.contains("  alice"));
        assert!(board.contains("241 (last 60)"));
        assert!(board.contains("> bob"));
    }

    #[test]
    fn test_render_marks_winner() {
        let mut game = started(&["alice", "bob"]);
        game.submit_manual_score(180).unwrap();
        game.submit_manual_score(0).unwrap();
        game.submit_manual_score(121).unwrap();
        let board = render_scoreboard(&game.view());
        assert!(board.contains("* alice"));
        assert!(board.ends_with("alice wins!"));
    }

    // === Prompt Tests ===

    #[test]
    fn test_prompt_shows_active_round() {
        let mut game = started(&["alice"]);
        assert_eq!(render_prompt(&game.view()), "alice (301) > ");
        game.add_throw(create_throw(20, Multiplier::Triple)).unwrap();
        assert_eq!(render_prompt(&game.view()), "alice (301) [T20 = 60 | 1/3] > ");
    }

    #[test]
    fn test_prompt_when_idle() {
        assert_eq!(render_prompt(&MatchState::new().view()), "players > ");
    }
}

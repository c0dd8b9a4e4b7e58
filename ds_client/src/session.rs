//! Line-driven scoring session.
//!
//! A [`Session`] owns the match and feeds it one line of input at a time,
//! turning the engine's events into output lines.

use dart_scorer::{InputMode, MatchError, MatchEvent, MatchState};
use log::debug;
use std::io::{self, BufRead, Write};

use crate::{
    board,
    commands::{Command, parse_command},
    config::{ClientConfig, ConfigError, split_names},
    render::{render_prompt, render_scoreboard},
};

/// Whether the session wants more input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    game: MatchState,
    settings: ClientConfig,
}

impl Session {
    #[must_use]
    pub fn new(settings: ClientConfig) -> Self {
        Self {
            game: MatchState::new(),
            settings,
        }
    }

    /// Start the match right away if player names were configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured names don't make a valid match.
    pub fn start(&mut self) -> Result<Vec<String>, ConfigError> {
        if self.settings.player_names.is_empty() {
            return Ok(vec![
                "Enter player names separated by commas.".to_string(),
            ]);
        }
        let config = self.settings.validate()?;
        self.game.start_game(config)?;
        Ok(self.drain_with_scoreboard())
    }

    #[must_use]
    pub fn game(&self) -> &MatchState {
        &self.game
    }

    #[must_use]
    pub fn settings(&self) -> &ClientConfig {
        &self.settings
    }

    /// Handle one line of input, returning what to print.
    pub fn handle_line(&mut self, line: &str) -> (Flow, Vec<String>) {
        if !self.game.is_started() {
            return self.handle_setup_line(line);
        }

        let command = match parse_command(line, self.settings.input_mode) {
            Ok(command) => command,
            Err(err) => return (Flow::Continue, vec![err.to_string()]),
        };
        debug!("command: {command:?}");

        let mut output = Vec::new();
        let result = match command {
            Command::Throw(throw) => self.game.add_throw(throw),
            Command::Hit { x, y } => match board::hit_test(x, y) {
                Some(throw) => self.game.add_throw(throw),
                None => {
                    output.push(format!("Miss at ({x}, {y}), nothing recorded"));
                    Ok(())
                }
            },
            Command::Manual(score) => self.game.submit_manual_score(score).map(drop),
            Command::Submit => self.game.submit_round().map(drop),
            Command::Undo => {
                if self.game.undo_throw().is_none() {
                    output.push("Nothing to undo".to_string());
                }
                Ok(())
            }
            Command::Clear => {
                self.game.clear_current_round();
                Ok(())
            }
            Command::Rematch => self.game.rematch(),
            Command::Reset => {
                self.game.reset_game();
                Ok(())
            }
            Command::Show => {
                output.push(render_scoreboard(&self.game.view()));
                Ok(())
            }
            Command::Help => {
                output.push(help_text(self.settings.input_mode));
                Ok(())
            }
            Command::Quit => return (Flow::Quit, output),
        };

        if let Err(err) = result {
            output.push(error_line(&err));
        }
        output.extend(self.drain_with_scoreboard());

        if !self.game.is_started() {
            output.push("Enter player names separated by commas.".to_string());
        }
        (Flow::Continue, output)
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(output, "{}", render_prompt(&self.game.view()))?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                return Ok(());
            };
            let (flow, replies) = self.handle_line(&line?);
            for reply in replies {
                writeln!(output, "{reply}")?;
            }
            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn handle_setup_line(&mut self, line: &str) -> (Flow, Vec<String>) {
        match line.trim().to_lowercase().as_str() {
            "quit" | "exit" | "q" => return (Flow::Quit, Vec::new()),
            "help" | "?" => {
                return (
                    Flow::Continue,
                    vec!["Enter player names separated by commas, e.g. 'alice, bob'.".to_string()],
                );
            }
            _ => {}
        }

        self.settings.player_names = split_names(line);
        let started = self
            .settings
            .validate()
            .and_then(|config| self.game.start_game(config).map_err(ConfigError::from));

        match started {
            Ok(()) => (Flow::Continue, self.drain_with_scoreboard()),
            Err(err) => (Flow::Continue, vec![format!("Error: {err}")]),
        }
    }

    /// Drain pending events into lines, adding the scoreboard whenever the
    /// turn changed hands.
    fn drain_with_scoreboard(&mut self) -> Vec<String> {
        let events = self.game.drain_events();
        let turn_over = events.iter().any(|event| {
            matches!(
                event,
                MatchEvent::Started { .. }
                    | MatchEvent::RoundScored { .. }
                    | MatchEvent::Bust { .. }
            )
        });

        let mut lines: Vec<String> = events.iter().map(ToString::to_string).collect();
        if turn_over {
            lines.push(render_scoreboard(&self.game.view()));
        }
        lines
    }
}

fn error_line(err: &MatchError) -> String {
    format!("Error: {err}")
}

/// Help text for the commands available in a mode.
#[must_use]
pub fn help_text(mode: InputMode) -> String {
    let entry = match mode {
        InputMode::Calculating => {
            "  <0-180>            Score the whole round (empty line scores 0)"
        }
        InputMode::Input => {
            "  20 | d16 | t19     Add a dart (bull = 50, 25 = outer bull)\n  \
             <empty>            Submit the round"
        }
        InputMode::Touch => {
            "  hit X Y            Add a dart at X,Y mm from the bull (Y up)\n  \
             <empty>            Submit the round"
        }
    };
    format!(
        "Commands ({mode} mode):\n{entry}\n  \
         score N            Score the whole round as N\n  \
         undo               Take back the last dart\n  \
         clear              Drop all darts of this round\n  \
         submit             Submit the round\n  \
         show               Show the scoreboard\n  \
         rematch            Play again with the same players\n  \
         reset              Start over with new players\n  \
         quit               Leave"
    )
}

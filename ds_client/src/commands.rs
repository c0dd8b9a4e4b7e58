use dart_scorer::{
    BULL, InputMode, MAX_ROUND_SCORE,
    entities::{Multiplier, Points, Throw},
    functional::{create_throw, validate_throw},
};
use std::fmt;

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A dart picked by segment and ring.
    Throw(Throw),
    /// A dart located on the board, in millimetres from the bull.
    Hit { x: f64, y: f64 },
    /// A whole round entered as one total.
    Manual(Points),
    Undo,
    Clear,
    Submit,
    Rematch,
    Reset,
    Show,
    Help,
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token doesn't describe a dart on the board.
    InvalidThrow(String),
    /// Manual score isn't a whole number.
    InvalidScore(String),
    /// Manual score is more than three darts can make.
    ScoreTooHigh(Points),
    /// Hit command without two numbers.
    InvalidCoordinates(String),
    /// Command exists but belongs to another input mode.
    WrongMode { command: String, mode: InputMode },
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThrow(token) => write!(
                f,
                "'{}' isn't a dart. Use a segment like '20', 'd16', 't19', 'bull' or '25'",
                token
            ),
            Self::InvalidScore(value) => {
                write!(f, "Invalid score '{}'. Please enter a valid score", value)
            }
            Self::ScoreTooHigh(_) => {
                write!(f, "Maximum possible score is {}", MAX_ROUND_SCORE)
            }
            Self::InvalidCoordinates(input) => write!(
                f,
                "Invalid hit '{}'. Use 'hit X Y' in millimetres from the bull (e.g., 'hit 0 103')",
                input
            ),
            Self::WrongMode { command, mode } => write!(
                f,
                "'{}' isn't available in {} mode. Type 'help' to see available commands",
                command, mode
            ),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Type 'help' to see available commands",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a line of input into a [`Command`] for the given input mode.
///
/// An empty line submits the round; in calculating mode it submits a
/// manual zero instead.
///
/// # Examples
///
/// ```
/// use ds_client::commands::{Command, parse_command};
/// use dart_scorer::{InputMode, Multiplier, functional::create_throw};
///
/// assert_eq!(parse_command("60", InputMode::Calculating), Ok(Command::Manual(60)));
/// assert_eq!(
///     parse_command("t20", InputMode::Input),
///     Ok(Command::Throw(create_throw(20, Multiplier::Triple)))
/// );
/// assert_eq!(parse_command("undo", InputMode::Touch), Ok(Command::Undo));
/// ```
pub fn parse_command(input: &str, mode: InputMode) -> Result<Command, ParseError> {
    let trimmed = input.trim().to_lowercase();

    match trimmed.as_str() {
        "" if mode == InputMode::Calculating => return Ok(Command::Manual(0)),
        "" | "submit" | "next" => return Ok(Command::Submit),
        "undo" => return Ok(Command::Undo),
        "clear" => return Ok(Command::Clear),
        "rematch" => return Ok(Command::Rematch),
        "reset" => return Ok(Command::Reset),
        "show" => return Ok(Command::Show),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed.split_ascii_whitespace().collect();
    match (parts.first(), mode) {
        (Some(&"score"), _) => parse_score_command(&parts),
        (Some(&"hit"), InputMode::Touch) => parse_hit_command(&parts),
        (Some(&"hit"), _) => Err(ParseError::WrongMode {
            command: "hit".to_string(),
            mode,
        }),
        (Some(_), InputMode::Calculating) if parts.len() == 1 => parse_manual_score(&trimmed),
        (Some(token), InputMode::Input) if parts.len() == 1 => {
            parse_throw(token).map(Command::Throw)
        }
        (Some(token), InputMode::Touch) if parts.len() == 1 && parse_throw(token).is_ok() => {
            Err(ParseError::WrongMode {
                command: token.to_string(),
                mode,
            })
        }
        _ => Err(ParseError::UnrecognizedCommand(trimmed.clone())),
    }
}

/// Parse a dart token: an optional `s`/`d`/`t` ring prefix and a segment,
/// or one of the bull spellings.
///
/// # Errors
///
/// Returns an error if the token doesn't name a dart that can be thrown.
pub fn parse_throw(token: &str) -> Result<Throw, ParseError> {
    let token = token.trim().to_lowercase();
    let invalid = || ParseError::InvalidThrow(token.clone());

    let throw = match token.as_str() {
        "bull" | "dbull" | "db" | "50" => create_throw(BULL, Multiplier::Double),
        "sbull" | "sb" | "outer" => create_throw(BULL, Multiplier::Single),
        _ => {
            let (multiplier, digits) = match token.split_at_checked(1) {
                Some(("s", rest)) => (Multiplier::Single, rest),
                Some(("d", rest)) => (Multiplier::Double, rest),
                Some(("t", rest)) => (Multiplier::Triple, rest),
                _ => (Multiplier::Single, token.as_str()),
            };
            let value = digits.parse::<u8>().map_err(|_| invalid())?;
            create_throw(value, multiplier)
        }
    };

    if validate_throw(&throw) {
        Ok(throw)
    } else {
        Err(invalid())
    }
}

/// Parse a score command: "score N"
fn parse_score_command(parts: &[&str]) -> Result<Command, ParseError> {
    match parts.get(1) {
        Some(value) if parts.len() == 2 => parse_manual_score(value),
        _ => Err(ParseError::InvalidScore(parts[1..].join(" "))),
    }
}

fn parse_manual_score(value: &str) -> Result<Command, ParseError> {
    let score = value
        .parse::<Points>()
        .map_err(|_| ParseError::InvalidScore(value.to_string()))?;
    if score > MAX_ROUND_SCORE {
        return Err(ParseError::ScoreTooHigh(score));
    }
    Ok(Command::Manual(score))
}

/// Parse a hit command: "hit X Y"
fn parse_hit_command(parts: &[&str]) -> Result<Command, ParseError> {
    let invalid = || ParseError::InvalidCoordinates(parts.join(" "));
    match (parts.get(1), parts.get(2), parts.len()) {
        (Some(x), Some(y), 3) => {
            let x = x.parse::<f64>().map_err(|_| invalid())?;
            let y = y.parse::<f64>().map_err(|_| invalid())?;
            if x.is_finite() && y.is_finite() {
                Ok(Command::Hit { x, y })
            } else {
                Err(invalid())
            }
        }
        _ => Err(invalid()),
    }
}

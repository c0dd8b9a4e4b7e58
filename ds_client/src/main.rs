//! A terminal darts scorer.
//!
//! Reads throws, scores or board hits line by line from stdin and keeps
//! the scoreboard for an x01 match.

use anyhow::{Context, Result};
use ds_client::{
    config::{ClientConfig, ConfigOverrides},
    session::{Session, help_text},
};
use log::info;
use pico_args::Arguments;
use std::io::{self, Write};

const HELP: &str = "\
Score a game of darts in the terminal

USAGE:
  ds_client [OPTIONS]

OPTIONS:
  --score    N           Starting score: 101, 301, 501 or 701  [default: env DARTS_STARTING_SCORE or 301]
  --players  NAMES       Comma-separated player names  [default: env DARTS_PLAYERS, else prompt]
  --mode     MODE        calculating, input or touch  [default: env DARTS_INPUT_MODE or calculating]

FLAGS:
  --json                 Print the final match as JSON on exit
  -h, --help             Print help information

ENVIRONMENT:
  DARTS_STARTING_SCORE   Starting score
  DARTS_PLAYERS          Player names
  DARTS_INPUT_MODE       Input mode
  RUST_LOG               Log level (e.g., debug)
";

struct Args {
    overrides: ConfigOverrides,
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        overrides: ConfigOverrides {
            starting_score: pargs.opt_value_from_str("--score")?,
            players: pargs.opt_value_from_str("--players")?,
            input_mode: pargs.opt_value_from_str("--mode")?,
        },
        json: pargs.contains("--json"),
    };

    env_logger::builder().format_target(false).init();

    run(args)
}

fn run(args: Args) -> Result<()> {
    let settings = ClientConfig::from_env(args.overrides).context("Failed to load config")?;
    info!(
        "scoring {} in {} mode",
        settings.starting_score, settings.input_mode
    );

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", help_text(settings.input_mode))?;

    let mut session = Session::new(settings);
    for line in session.start().context("Invalid player list")? {
        writeln!(stdout, "{line}")?;
    }

    session.run(io::stdin().lock(), &mut stdout)?;

    if args.json {
        let view = session.game().view();
        writeln!(stdout, "{}", serde_json::to_string_pretty(&view)?)?;
    }

    Ok(())
}

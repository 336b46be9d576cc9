//! Command-line arguments.
//!
//! Parsing is a separate step that yields a typed `Command` before any
//! game object exists; a bad player type never starts a game.

use std::path::PathBuf;

use crate::core::{parse_timed, ContestantKind, MatchConfig, PigError, PigResult};

pub const USAGE: &str = r#"pig

USAGE:
    pig --player1 <TYPE> --player2 <TYPE> [--timed <BOOL>] [OPTIONS]

OPTIONS:
    --player1 TYPE       First player: human, h, computer or c (required)
    --player2 TYPE       Second player: human, h, computer or c (required)
    --timed BOOL         Play the timed version when BOOL is true (default: false)
    --time-limit SECS    Time limit of a timed game (default: 60)
    --seed N             Seed the dice for a replayable session
    --event-log PATH     Append every game event to PATH as NDJSON
    -h, --help           Print this help
"#;

/// Validated arguments for a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub player1: ContestantKind,
    pub player2: ContestantKind,
    pub config: MatchConfig,
    pub event_log: Option<PathBuf>,
}

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Play(CliArgs),
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> PigResult<Command>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();

    let mut player1 = None;
    let mut player2 = None;
    let mut config = MatchConfig::default();
    let mut event_log = None;

    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--help" | "-h" => return Ok(Command::Help),
            "--player1" => player1 = Some(value(&args, i)?.parse::<ContestantKind>()?),
            "--player2" => player2 = Some(value(&args, i)?.parse::<ContestantKind>()?),
            "--timed" => config.timed = parse_timed(value(&args, i)?),
            "--time-limit" => {
                let raw = value(&args, i)?;
                let secs = raw.parse().map_err(|_| {
                    PigError::InvalidConfiguration(format!("invalid --time-limit value: {raw}"))
                })?;
                config = config.with_time_limit_secs(secs);
            }
            "--seed" => {
                let raw = value(&args, i)?;
                let seed = raw.parse().map_err(|_| {
                    PigError::InvalidConfiguration(format!("invalid --seed value: {raw}"))
                })?;
                config = config.with_seed(seed);
            }
            "--event-log" => event_log = Some(PathBuf::from(value(&args, i)?)),
            other => {
                return Err(PigError::InvalidConfiguration(format!(
                    "unknown option: {other}"
                )))
            }
        }
        i += 2;
    }

    let player1 = player1
        .ok_or_else(|| PigError::InvalidConfiguration("--player1 is required".to_string()))?;
    let player2 = player2
        .ok_or_else(|| PigError::InvalidConfiguration("--player2 is required".to_string()))?;

    Ok(Command::Play(CliArgs {
        player1,
        player2,
        config,
        event_log,
    }))
}

fn value(args: &[String], flag_index: usize) -> PigResult<&str> {
    args.get(flag_index + 1)
        .map(String::as_str)
        .ok_or_else(|| {
            PigError::InvalidConfiguration(format!("missing value for {}", args[flag_index]))
        })
}

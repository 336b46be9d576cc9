//! Play-again loop.
//!
//! Each round creates fresh contestants (asking for their names), plays
//! one match, then asks whether to go again. Anything but `y`/`yes`, or
//! the end of input, ends the session.

use std::io::{BufRead, Write};

use crate::core::{PigError, PigResult, SixSidedDie};
use crate::game::{Match, Prompt, TimedMatch};
use crate::players::{ask_name, Contestant};
use crate::rules::GameResult;

use super::args::CliArgs;
use super::console::Console;

pub const PLAY_AGAIN_QUESTION: &str = "Do you want to start a new game? y/n ";

/// Play matches until the user declines another. Returns every result.
pub fn run_session<R: BufRead, W: Write>(
    args: &CliArgs,
    console: &mut Console<R, W>,
) -> PigResult<Vec<GameResult>> {
    let mut results = Vec::new();

    for game_index in 0u64.. {
        let first = Contestant::of_kind(args.player1, ask_name(console)?)?;
        let second = Contestant::of_kind(args.player2, ask_name(console)?)?;

        let die = match args.config.seed_for_game(game_index) {
            Some(seed) => SixSidedDie::new(seed),
            None => SixSidedDie::from_entropy(),
        };
        console.say(&format!("Dice seed: {}", die.seed()))?;

        let mut game = Match::new(first, second, die);
        let result = if args.config.timed {
            TimedMatch::new(&mut game, args.config.time_limit())?.play(console)?
        } else {
            game.play(console)?
        };
        results.push(result);

        if !wants_another(console)? {
            break;
        }
    }

    console.say("Good Bye.........")?;
    console.say("See you soon-------------------")?;
    Ok(results)
}

fn wants_another(prompt: &mut dyn Prompt) -> PigResult<bool> {
    match prompt.ask(PLAY_AGAIN_QUESTION) {
        Ok(answer) => Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        )),
        Err(PigError::InputClosed) => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContestantKind, MatchConfig};
    use std::io::Cursor;

    fn args(config: MatchConfig) -> CliArgs {
        CliArgs {
            player1: ContestantKind::Computer,
            player2: ContestantKind::Computer,
            config,
            event_log: None,
        }
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_single_game_then_no() {
        let mut c = console("HAL\nDeep Thought\nn\n");
        let results = run_session(&args(MatchConfig::new().with_seed(3)), &mut c).unwrap();

        assert_eq!(results.len(), 1);
        assert!(results[0].winner().is_some());

        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("Dice seed: 3"));
        assert!(out.contains("Starting game of Pig"));
        assert!(out.ends_with("Good Bye.........\nSee you soon-------------------\n"));
    }

    #[test]
    fn test_play_again_uses_next_seed() {
        let mut c = console("A\nB\nYES\nC\nD\nno\n");
        let results = run_session(&args(MatchConfig::new().with_seed(10)), &mut c).unwrap();

        assert_eq!(results.len(), 2);
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("Dice seed: 10"));
        assert!(out.contains("Dice seed: 11"));
    }

    #[test]
    fn test_end_of_input_at_replay_prompt_exits_cleanly() {
        let mut c = console("A\nB\n");
        let results = run_session(&args(MatchConfig::new().with_seed(1)), &mut c).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_end_of_input_during_names_is_an_error() {
        let mut c = console("A\n");
        let err = run_session(&args(MatchConfig::default()), &mut c).unwrap_err();
        assert!(matches!(err, PigError::InputClosed));
    }

    #[test]
    fn test_timed_session_with_zero_limit() {
        let config = MatchConfig::new()
            .with_timed(true)
            .with_time_limit_secs(0)
            .with_seed(4);
        let mut c = console("A\nB\nn\n");
        let results = run_session(&args(config), &mut c).unwrap();

        assert_eq!(results, vec![GameResult::TimeExpired]);
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("Time's up! No one wins."));
        assert!(out.contains("Game over!"));
    }

    #[test]
    fn test_huge_time_limit_is_a_configuration_error() {
        let config = MatchConfig::new()
            .with_timed(true)
            .with_time_limit_secs(u64::MAX)
            .with_seed(1);
        let mut c = console("A\nB\nn\n");

        let err = run_session(&args(config), &mut c).unwrap_err();
        assert!(matches!(err, PigError::InvalidConfiguration(_)));
    }
}

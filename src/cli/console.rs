//! Text frontend over any `BufRead`/`Write` pair.
//!
//! Renders match events as narration and, optionally, appends each event
//! as one JSON line to an event log.

use std::io::{BufRead, Write};

use crate::core::{PigError, PigResult};
use crate::game::{MatchEvent, MatchObserver, Prompt};
use crate::players::Decision;

pub const RULES: &str = "The rules of Pig are simple. The game features two players, whose goal is to reach 100 points first.
Each turn, a player repeatedly rolls a die until either a 1 is rolled or the player holds and scores the sum of the
rolls (i.e. the turn total). At any time during a player's turn, the player is faced with two decisions:
- roll: If the player rolls a
    1: the player scores nothing and it becomes the opponent's turn.
    2 - 6: the number is added to the player's turn total and the player's turn continues.
- hold: The turn total is added to the player's score and it becomes the opponent's turn.";

const RULE: &str = "--------------------------------------------------";
const SCORE_CARD_BANNER: &str = "*********** Score Card ***********";

/// Console frontend.
pub struct Console<R, W> {
    input: R,
    output: W,
    event_log: Option<Box<dyn Write>>,
    current: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            event_log: None,
            current: String::new(),
        }
    }

    /// Also write every event as NDJSON to `log`.
    pub fn with_event_log(mut self, log: Box<dyn Write>) -> Self {
        self.event_log = Some(log);
        self
    }

    /// Print one line.
    pub fn say(&mut self, line: &str) -> PigResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn log(&mut self, event: &MatchEvent) -> PigResult<()> {
        if let Some(log) = self.event_log.as_mut() {
            serde_json::to_writer(&mut *log, event)?;
            writeln!(log)?;
            log.flush()?;
        }
        Ok(())
    }

    fn render(&mut self, event: &MatchEvent) -> PigResult<()> {
        match event {
            MatchEvent::MatchStarted { timed: false, .. } => {
                self.say("Starting game of Pig.............")?;
                self.say(RULE)?;
                self.say(RULES)?;
                self.say(RULE)?;
            }
            MatchEvent::MatchStarted {
                timed: true,
                time_limit_secs,
            } => {
                self.say("Starting timed game of Pig...")?;
                if let Some(secs) = time_limit_secs {
                    self.say(&format!("Time limit: {secs} seconds"))?;
                }
                self.say(RULE)?;
            }
            MatchEvent::TurnStarted { name, .. } => {
                self.current = name.clone();
                self.say(&format!("It's {name} player's turn"))?;
            }
            MatchEvent::Rolled {
                face,
                accumulation,
                prospective_total,
                ..
            } => {
                self.say(&format!("You rolled: {face}"))?;
                if *accumulation > 0 {
                    self.say(&format!("Your turn score is: {accumulation}"))?;
                    self.say(&format!("Your total score is: {prospective_total}"))?;
                }
            }
            MatchEvent::Busted { .. } => {
                self.say("No points for you!")?;
                self.say("Your turn is over")?;
            }
            MatchEvent::Decided {
                decision,
                target: Some(target),
                ..
            } => {
                let verb = match decision {
                    Decision::Hold => "holds",
                    Decision::Roll => "rolls again",
                };
                let line = format!("{} is aiming for {target} this turn and {verb}", self.current);
                self.say(&line)?;
            }
            MatchEvent::Decided { target: None, .. } => {}
            MatchEvent::Held { name, score, .. } => {
                self.say(&format!("{name} is holding. Total Score is: {score}"))?;
            }
            MatchEvent::ScoreCard { scores } => {
                self.say(SCORE_CARD_BANNER)?;
                for line in scores {
                    self.say(&format!("{} : {} points", line.name, line.score))?;
                }
                self.say(SCORE_CARD_BANNER)?;
            }
            MatchEvent::Won { name, score, .. } => {
                self.say("Winner")?;
                self.say(&format!("{name} wins with {score} points!"))?;
            }
            MatchEvent::TimeExpired => self.say("Time's up! No one wins.")?,
            MatchEvent::MatchEnded { .. } => self.say("Game over!")?,
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn ask(&mut self, question: &str) -> PigResult<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PigError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn reject(&mut self, message: &str) -> PigResult<()> {
        self.say(message)
    }
}

impl<R: BufRead, W: Write> MatchObserver for Console<R, W> {
    fn on_event(&mut self, event: &MatchEvent) -> PigResult<()> {
        self.render(event)?;
        self.log(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::game::ScoreLine;
    use crate::rules::GameResult;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn text(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    /// Shared buffer so the test can read what the console logged.
    #[derive(Clone, Default)]
    struct SharedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_ask_strips_line_endings() {
        let mut c = console("Ada\r\nh\n");
        assert_eq!(c.ask("Name? ").unwrap(), "Ada");
        assert_eq!(c.ask("Hold? ").unwrap(), "h");
        assert!(matches!(c.ask("More? "), Err(PigError::InputClosed)));
        assert_eq!(text(c), "Name? Hold? More? ");
    }

    #[test]
    fn test_renders_turn() {
        let mut c = console("");
        let p = PlayerId::new(0);
        let events = [
            MatchEvent::TurnStarted {
                player: p,
                name: "Ada".to_string(),
            },
            MatchEvent::Rolled {
                player: p,
                face: 4,
                accumulation: 4,
                prospective_total: 14,
            },
            MatchEvent::Rolled {
                player: p,
                face: 1,
                accumulation: 0,
                prospective_total: 10,
            },
            MatchEvent::Busted {
                player: p,
                forfeited: 4,
            },
            MatchEvent::ScoreCard {
                scores: vec![
                    ScoreLine {
                        player: p,
                        name: "Ada".to_string(),
                        score: 10,
                    },
                    ScoreLine {
                        player: PlayerId::new(1),
                        name: "HAL".to_string(),
                        score: 0,
                    },
                ],
            },
        ];
        for event in &events {
            c.on_event(event).unwrap();
        }

        let out = text(c);
        let expected = "It's Ada player's turn
You rolled: 4
Your turn score is: 4
Your total score is: 14
You rolled: 1
No points for you!
Your turn is over
*********** Score Card ***********
Ada : 10 points
HAL : 0 points
*********** Score Card ***********
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_renders_automated_decision() {
        let mut c = console("");
        c.on_event(&MatchEvent::TurnStarted {
            player: PlayerId::new(1),
            name: "HAL".to_string(),
        })
        .unwrap();
        c.on_event(&MatchEvent::Decided {
            player: PlayerId::new(1),
            decision: Decision::Roll,
            target: Some(25),
        })
        .unwrap();
        c.on_event(&MatchEvent::Decided {
            player: PlayerId::new(1),
            decision: Decision::Hold,
            target: None,
        })
        .unwrap();

        let out = text(c);
        assert!(out.ends_with("HAL is aiming for 25 this turn and rolls again\n"));
    }

    #[test]
    fn test_event_log_is_ndjson() {
        let log = SharedLog::default();
        let mut c = console("").with_event_log(Box::new(log.clone()));

        c.on_event(&MatchEvent::TimeExpired).unwrap();
        c.on_event(&MatchEvent::MatchEnded {
            result: GameResult::TimeExpired,
        })
        .unwrap();

        let logged = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<_> = logged.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: MatchEvent = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, MatchEvent::TimeExpired);
        assert_eq!(text(c), "Time's up! No one wins.\nGame over!\n");
    }
}

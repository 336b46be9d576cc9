//! Turn-level behaviour through the public API.

use proptest::prelude::*;

use rust_pig::{
    Contestant, Decision, MatchEvent, PlayerId, ScriptedDie, ScriptedFrontend, Turn, TurnOutcome,
    TurnState, WIN_TARGET,
};

/// Contestant A at 0 rolls 3, 4, then 1: accumulation reaches 7 and is lost.
#[test]
fn test_three_four_one_busts() {
    let mut a = Contestant::human("A").unwrap();
    let mut die = ScriptedDie::new([3, 4, 1]).unwrap();
    let mut frontend = ScriptedFrontend::new(["r", "r"]);

    let mut turn = Turn::new(PlayerId::new(0), WIN_TARGET);
    turn.step(&mut a, &mut die, &mut frontend).unwrap();
    assert_eq!(turn.accumulation(), 3);
    turn.step(&mut a, &mut die, &mut frontend).unwrap();
    turn.step(&mut a, &mut die, &mut frontend).unwrap();
    assert_eq!(turn.accumulation(), 7);

    let outcome = turn.run(&mut a, &mut die, &mut frontend).unwrap();
    assert_eq!(outcome, TurnOutcome::Busted { forfeited: 7 });
    assert_eq!(turn.state(), TurnState::Busted);
    assert_eq!(a.score(), 0);
}

/// Automated contestant at 80 holds exactly at 20 and wins with 100.
#[test]
fn test_automated_at_eighty_wins_at_twenty() {
    let mut bot = Contestant::automated("HAL").unwrap();
    bot.add_to_score(80).unwrap();
    let mut die = ScriptedDie::new([5, 5, 5, 5]).unwrap();
    let mut frontend = ScriptedFrontend::silent();

    let outcome = Turn::new(PlayerId::new(0), WIN_TARGET)
        .run(&mut bot, &mut die, &mut frontend)
        .unwrap();

    assert_eq!(outcome, TurnOutcome::Won { score: 100 });
    assert_eq!(bot.score(), 100);
    // The fourth roll reaches the target before any hold decision
    let decided = frontend
        .events
        .iter()
        .filter(|e| matches!(e, MatchEvent::Decided { .. }))
        .count();
    assert_eq!(decided, 3);
}

/// A human at 90 who holds below the target just banks.
#[test]
fn test_hold_below_target_ends_turn() {
    let mut a = Contestant::human("A").unwrap();
    a.add_to_score(90).unwrap();
    let mut die = ScriptedDie::new([4]).unwrap();
    let mut frontend = ScriptedFrontend::new(["hold"]);

    let outcome = Turn::new(PlayerId::new(0), WIN_TARGET)
        .run(&mut a, &mut die, &mut frontend)
        .unwrap();

    assert_eq!(outcome, TurnOutcome::Held { banked: 4 });
    assert_eq!(a.score(), 94);
}

/// Bad answers are reported and asked again, never fatal.
#[test]
fn test_human_reprompted_on_bad_input() {
    let mut a = Contestant::human("A").unwrap();
    let mut die = ScriptedDie::new([6]).unwrap();
    let mut frontend = ScriptedFrontend::new(["keep going", "?", "H"]);

    let outcome = Turn::new(PlayerId::new(0), WIN_TARGET)
        .run(&mut a, &mut die, &mut frontend)
        .unwrap();

    assert_eq!(outcome, TurnOutcome::Held { banked: 6 });
    assert_eq!(frontend.rejections.len(), 2);
    assert!(frontend.events.contains(&MatchEvent::Decided {
        player: PlayerId::new(0),
        decision: Decision::Hold,
        target: None,
    }));
}

proptest! {
    /// Without a one, the accumulation is the running sum of the rolls.
    #[test]
    fn prop_accumulation_is_sum_of_rolls(rolls in prop::collection::vec(2u8..=6, 1..15)) {
        let mut a = Contestant::human("A").unwrap();
        let mut die = ScriptedDie::new(rolls.clone()).unwrap();
        // Always roll; stay well away from the target
        let answers = vec!["r"; rolls.len()];
        let mut frontend = ScriptedFrontend::new(answers);
        let mut turn = Turn::new(PlayerId::new(0), WIN_TARGET);

        let mut expected = 0i64;
        for &face in &rolls {
            // Rolling -> Deciding
            turn.step(&mut a, &mut die, &mut frontend).unwrap();
            expected += i64::from(face);
            prop_assert_eq!(turn.accumulation(), expected);
            // Deciding -> Rolling, unless the target was reached
            if turn.step(&mut a, &mut die, &mut frontend).unwrap() == TurnState::Won {
                break;
            }
        }
    }

    /// A one ends the turn with no score change, whatever came before.
    #[test]
    fn prop_one_always_busts(start in 0i64..99, before in prop::collection::vec(2u8..=6, 0..6)) {
        let mut a = Contestant::human("A").unwrap();
        a.add_to_score(start).unwrap();

        let mut faces = before.clone();
        faces.push(1);
        let mut die = ScriptedDie::new(faces).unwrap();
        let mut frontend = ScriptedFrontend::new(vec!["r"; before.len()]);

        let outcome = Turn::new(PlayerId::new(0), WIN_TARGET)
            .run(&mut a, &mut die, &mut frontend)
            .unwrap();

        let sum: i64 = before.iter().map(|&f| i64::from(f)).sum();
        if start + sum >= WIN_TARGET {
            // Reached the target on the way; the one was never rolled
            prop_assert!(matches!(outcome, TurnOutcome::Won { .. }), "expected Won, got {:?}", outcome);
        } else {
            prop_assert_eq!(outcome, TurnOutcome::Busted { forfeited: sum });
            prop_assert_eq!(a.score(), start);
        }
    }
}

//! Win rule and match results.

use serde::{Deserialize, Serialize};

use crate::core::{PigResult, PlayerId};
use crate::players::Contestant;

/// Result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// A contestant reached the win target.
    Winner(PlayerId),
    /// A timed match ran out of time. Nobody wins.
    TimeExpired,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning seat, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::TimeExpired => None,
        }
    }
}

/// Check whether `contestant` wins with `turn_accumulation` unbanked points.
///
/// A banked score already at or above `win_target` wins outright. Otherwise,
/// if banking the accumulation would reach the target, it is banked and the
/// contestant wins.
pub fn check_win(contestant: &mut Contestant, turn_accumulation: i64, win_target: i64) -> PigResult<bool> {
    if contestant.score() >= win_target {
        return Ok(true);
    }
    if contestant.score() + turn_accumulation >= win_target {
        contestant.add_to_score(turn_accumulation)?;
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WIN_TARGET;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert_eq!(result.winner(), Some(PlayerId::new(1)));

        let expired = GameResult::TimeExpired;
        assert!(!expired.is_winner(PlayerId::new(0)));
        assert_eq!(expired.winner(), None);
    }

    #[test]
    fn test_below_target_is_not_a_win() {
        let mut c = Contestant::human("Ada").unwrap();
        c.add_to_score(50).unwrap();

        assert!(!check_win(&mut c, 49, WIN_TARGET).unwrap());
        assert_eq!(c.score(), 50);
    }

    #[test]
    fn test_exact_target_wins_and_banks() {
        let mut c = Contestant::human("Ada").unwrap();
        c.add_to_score(88).unwrap();

        assert!(check_win(&mut c, 12, WIN_TARGET).unwrap());
        assert_eq!(c.score(), 100);
    }

    #[test]
    fn test_overshoot_wins_and_banks() {
        let mut c = Contestant::human("Ada").unwrap();
        c.add_to_score(95).unwrap();

        assert!(check_win(&mut c, 11, WIN_TARGET).unwrap());
        assert_eq!(c.score(), 106);
    }

    #[test]
    fn test_score_already_at_target() {
        let mut c = Contestant::human("Ada").unwrap();
        c.add_to_score(100).unwrap();

        assert!(check_win(&mut c, 0, WIN_TARGET).unwrap());
        assert!(check_win(&mut c, 6, WIN_TARGET).unwrap());
        // Accumulation is not banked twice
        assert_eq!(c.score(), 100);
    }

    #[test]
    fn test_result_serde() {
        let json = serde_json::to_string(&GameResult::Winner(PlayerId::new(0))).unwrap();
        assert_eq!(json, r#"{"winner":0}"#);
        let json = serde_json::to_string(&GameResult::TimeExpired).unwrap();
        assert_eq!(json, r#""time_expired""#);
    }
}

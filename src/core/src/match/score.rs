use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Final score of a played match. A match without a `Score` is unplayed,
/// so "played" and "both goal counts set" can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub home_goals: u8,
    pub away_goals: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl Score {
    pub fn new(home_goals: u8, away_goals: u8) -> Self {
        Score {
            home_goals,
            away_goals,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        match self.home_goals.cmp(&self.away_goals) {
            Ordering::Greater => MatchOutcome::HomeWin,
            Ordering::Equal => MatchOutcome::Draw,
            Ordering::Less => MatchOutcome::AwayWin,
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.home_goals, self.away_goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome() {
        assert_eq!(Score::new(2, 1).outcome(), MatchOutcome::HomeWin);
        assert_eq!(Score::new(1, 1).outcome(), MatchOutcome::Draw);
        assert_eq!(Score::new(0, 3).outcome(), MatchOutcome::AwayWin);
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::new(3, 0).to_string(), "3 - 0");
    }
}

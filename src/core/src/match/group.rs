use crate::r#match::{MatchId, Score};
use crate::team::TeamId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMatch {
    pub id: MatchId,
    pub round: u8,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub result: Option<Score>,
}

impl GroupMatch {
    pub fn new(id: MatchId, round: u8, home_team_id: TeamId, away_team_id: TeamId) -> Self {
        GroupMatch {
            id,
            round,
            home_team_id,
            away_team_id,
            result: None,
        }
    }

    #[inline]
    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    pub fn home_goals(&self) -> Option<u8> {
        self.result.map(|s| s.home_goals)
    }

    pub fn away_goals(&self) -> Option<u8> {
        self.result.map(|s| s.away_goals)
    }

    pub fn record(&mut self, score: Score) {
        self.result = Some(score);
    }

    pub fn clear(&mut self) {
        self.result = None;
    }
}

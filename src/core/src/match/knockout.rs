use crate::r#match::{MatchId, Score};
use crate::team::TeamId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KnockoutStage {
    Quarter,
    Semi,
    Final,
}

impl KnockoutStage {
    pub const ALL: [KnockoutStage; 3] = [
        KnockoutStage::Quarter,
        KnockoutStage::Semi,
        KnockoutStage::Final,
    ];

    /// Number of two-legged ties played in this stage.
    pub fn ties(&self) -> u8 {
        match self {
            KnockoutStage::Quarter => 4,
            KnockoutStage::Semi => 2,
            KnockoutStage::Final => 1,
        }
    }

    /// Stage that the winners of this stage move into.
    pub fn next(&self) -> Option<KnockoutStage> {
        match self {
            KnockoutStage::Quarter => Some(KnockoutStage::Semi),
            KnockoutStage::Semi => Some(KnockoutStage::Final),
            KnockoutStage::Final => None,
        }
    }
}

impl Display for KnockoutStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KnockoutStage::Quarter => write!(f, "quarterfinal"),
            KnockoutStage::Semi => write!(f, "semifinal"),
            KnockoutStage::Final => write!(f, "final"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Leg {
    First,
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutMatch {
    pub id: MatchId,
    pub stage: KnockoutStage,
    pub tie_number: u8,
    pub leg: Leg,
    pub home_team_id: Option<TeamId>,
    pub away_team_id: Option<TeamId>,
    pub result: Option<Score>,
}

impl KnockoutMatch {
    pub fn new(id: MatchId, stage: KnockoutStage, tie_number: u8, leg: Leg) -> Self {
        KnockoutMatch {
            id,
            stage,
            tie_number,
            leg,
            home_team_id: None,
            away_team_id: None,
            result: None,
        }
    }

    #[inline]
    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    /// Both sides of the fixture are known.
    pub fn is_ready(&self) -> bool {
        self.home_team_id.is_some() && self.away_team_id.is_some()
    }

    pub fn home_goals(&self) -> Option<u8> {
        self.result.map(|s| s.home_goals)
    }

    pub fn away_goals(&self) -> Option<u8> {
        self.result.map(|s| s.away_goals)
    }

    pub fn is_leg_of(&self, stage: KnockoutStage, tie_number: u8) -> bool {
        self.stage == stage && self.tie_number == tie_number
    }

    pub fn record(&mut self, score: Score) {
        self.result = Some(score);
    }
}

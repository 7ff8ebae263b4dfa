use crate::r#match::{KnockoutMatch, KnockoutStage};
use crate::team::TeamId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Two legs of one pairing seen together. The nominal home team is the
/// first leg's host; legs swap venue, so its second-leg goals are the
/// second leg's away goals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockoutTie {
    pub stage: KnockoutStage,
    pub tie_number: u8,
    pub first_leg: KnockoutMatch,
    pub second_leg: KnockoutMatch,
    pub home_team_id: Option<TeamId>,
    pub away_team_id: Option<TeamId>,
    pub aggregate_home: u16,
    pub aggregate_away: u16,
    pub winner_id: Option<TeamId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TieSide {
    Home,
    Away,
}

impl KnockoutTie {
    pub fn compute(first_leg: &KnockoutMatch, second_leg: &KnockoutMatch) -> Self {
        let first_home = first_leg.home_goals().unwrap_or(0) as u16;
        let first_away = first_leg.away_goals().unwrap_or(0) as u16;
        let second_home = second_leg.home_goals().unwrap_or(0) as u16;
        let second_away = second_leg.away_goals().unwrap_or(0) as u16;

        let aggregate_home = first_home + second_away;
        let aggregate_away = first_away + second_home;

        let winner_id = if first_leg.is_played() && second_leg.is_played() {
            // Away goals: the nominal home side played away in the second leg
            let side = Self::decide(aggregate_home, aggregate_away, second_away, first_away);

            match side {
                TieSide::Home => first_leg.home_team_id,
                TieSide::Away => first_leg.away_team_id,
            }
        } else {
            None
        };

        KnockoutTie {
            stage: first_leg.stage,
            tie_number: first_leg.tie_number,
            first_leg: first_leg.clone(),
            second_leg: second_leg.clone(),
            home_team_id: first_leg.home_team_id,
            away_team_id: first_leg.away_team_id,
            aggregate_home,
            aggregate_away,
            winner_id,
        }
    }

    fn decide(aggregate_home: u16, aggregate_away: u16, home_away_goals: u16, away_away_goals: u16) -> TieSide {
        match aggregate_home.cmp(&aggregate_away) {
            Ordering::Greater => TieSide::Home,
            Ordering::Less => TieSide::Away,
            Ordering::Equal => match home_away_goals.cmp(&away_away_goals) {
                Ordering::Less => TieSide::Away,
                // Level on away goals too: first-leg host goes through
                Ordering::Greater | Ordering::Equal => TieSide::Home,
            },
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.winner_id.is_some()
    }

    pub fn loser_id(&self) -> Option<TeamId> {
        let winner = self.winner_id?;

        if self.home_team_id == Some(winner) {
            self.away_team_id
        } else {
            self.home_team_id
        }
    }
}

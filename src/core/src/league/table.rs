use crate::knockout::KNOCKOUT_QUALIFIERS;
use crate::league::LeagueSettings;
use crate::r#match::{GroupMatch, MatchOutcome};
use crate::team::{TeamCollection, TeamId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTableRow {
    pub team_id: TeamId,
    pub played: u8,
    pub wins: u8,
    pub draws: u8,
    pub losses: u8,
    pub goals_for: u16,
    pub goals_against: u16,
    pub points: u16,
    pub rank: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableZone {
    Qualification,
    Neutral,
    Relegation,
}

impl LeagueTableRow {
    pub fn new(team_id: TeamId) -> Self {
        LeagueTableRow {
            team_id,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
            rank: 0,
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }

    fn add(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += scored as u16;
        self.goals_against += conceded as u16;

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.wins += 1;
                self.points += 3;
            }
            Ordering::Equal => {
                self.draws += 1;
                self.points += 1;
            }
            Ordering::Less => {
                self.losses += 1;
            }
        }
    }

    pub fn zone(&self, settings: &LeagueSettings, total_teams: usize) -> TableZone {
        let rank = self.rank as usize;

        if rank <= KNOCKOUT_QUALIFIERS {
            TableZone::Qualification
        } else if rank > total_teams.saturating_sub(settings.relegation_places) {
            TableZone::Relegation
        } else {
            TableZone::Neutral
        }
    }
}

// Tie-break chain, applied in order
fn compare_points(a: &LeagueTableRow, b: &LeagueTableRow) -> Ordering {
    b.points.cmp(&a.points)
}

fn compare_wins(a: &LeagueTableRow, b: &LeagueTableRow) -> Ordering {
    b.wins.cmp(&a.wins)
}

fn compare_goal_difference(a: &LeagueTableRow, b: &LeagueTableRow) -> Ordering {
    b.goal_difference().cmp(&a.goal_difference())
}

fn compare_goals_for(a: &LeagueTableRow, b: &LeagueTableRow) -> Ordering {
    b.goals_for.cmp(&a.goals_for)
}

impl LeagueTable {
    /// Rebuilds the whole table from the played group matches. Rows that
    /// stay level on every criterion keep registry order.
    pub fn compute(matches: &[GroupMatch], teams: &TeamCollection) -> Self {
        let mut rows: Vec<LeagueTableRow> =
            teams.iter().map(|team| LeagueTableRow::new(team.id)).collect();

        for group_match in matches {
            let Some(score) = group_match.result else {
                continue;
            };

            if let Some(home) = rows.iter_mut().find(|r| r.team_id == group_match.home_team_id) {
                home.add(score.home_goals, score.away_goals);
            }

            if let Some(away) = rows.iter_mut().find(|r| r.team_id == group_match.away_team_id) {
                away.add(score.away_goals, score.home_goals);
            }
        }

        rows.sort_by(|a, b| {
            compare_points(a, b)
                .then_with(|| compare_wins(a, b))
                .then_with(|| compare_goal_difference(a, b))
                .then_with(|| compare_goals_for(a, b))
        });

        for (idx, row) in rows.iter_mut().enumerate() {
            row.rank = (idx + 1) as u8;
        }

        LeagueTable { rows }
    }

    pub fn get(&self, team_id: TeamId) -> Option<&LeagueTableRow> {
        self.rows.iter().find(|r| r.team_id == team_id)
    }

    /// Team ids of the first `count` ranks, best first.
    pub fn top(&self, count: usize) -> Vec<TeamId> {
        self.rows.iter().take(count).map(|r| r.team_id).collect()
    }

    /// Points handed out by a set of matches: three per decisive match, two per draw.
    pub fn points_awarded(matches: &[GroupMatch]) -> u32 {
        matches
            .iter()
            .filter_map(|m| m.result)
            .map(|score| match score.outcome() {
                MatchOutcome::Draw => 2,
                _ => 3,
            })
            .sum()
    }
}

use crate::error::SessionError;
use crate::r#match::{GroupMatch, MatchId};
use crate::team::{TeamCollection, TeamId};
use log::debug;

pub struct Schedule;

impl Schedule {
    /// Builds a single round robin with the circle method: the first team
    /// stays in place while the others rotate one slot per round. Every
    /// team plays once per round and every pair meets exactly once.
    pub fn generate(teams: &TeamCollection) -> Result<Vec<GroupMatch>, SessionError> {
        let team_ids = teams.ids();
        let team_count = team_ids.len();

        if team_count < 2 || team_count % 2 != 0 || team_count > u8::MAX as usize {
            return Err(SessionError::InvalidTeamCount(team_count));
        }

        let rounds = team_count - 1;
        let matches_per_round = team_count / 2;

        // Slot -> index into team_ids
        let mut table: Vec<usize> = (0..team_count).collect();

        let mut matches = Vec::with_capacity(rounds * matches_per_round);
        let mut match_id: MatchId = 1;

        for round in 0..rounds {
            for slot in 0..matches_per_round {
                let first = team_ids[table[slot]];
                let second = team_ids[table[team_count - 1 - slot]];

                let (home, away) = Self::venue(round, slot, first, second);

                matches.push(GroupMatch::new(match_id, (round + 1) as u8, home, away));
                match_id += 1;
            }

            if let Some(last) = table.pop() {
                table.insert(1, last);
            }
        }

        debug!(
            "generated group schedule: {} rounds, {} matches",
            rounds,
            matches.len()
        );

        Ok(matches)
    }

    // Alternates venues so no team is stuck at home or away for the whole stage
    fn venue(round: usize, slot: usize, first: TeamId, second: TeamId) -> (TeamId, TeamId) {
        if (round + slot) % 2 == 0 {
            (first, second)
        } else {
            (second, first)
        }
    }

    pub fn max_round(matches: &[GroupMatch]) -> u8 {
        matches.iter().map(|m| m.round).max().unwrap_or(1)
    }

    /// First round that still has an unplayed match, or the last round when
    /// the stage is complete.
    pub fn current_round(matches: &[GroupMatch]) -> u8 {
        let max_round = Self::max_round(matches);

        (1..=max_round)
            .find(|round| {
                matches
                    .iter()
                    .any(|m| m.round == *round && !m.is_played())
            })
            .unwrap_or(max_round)
    }
}

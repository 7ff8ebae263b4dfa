use crate::knockout::{Bracket, KnockoutTie};
use crate::league::LeagueTable;
use crate::r#match::GroupMatch;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompetitionStage {
    Group,
    Knockout,
}

impl Display for CompetitionStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CompetitionStage::Group => write!(f, "GROUP"),
            CompetitionStage::Knockout => write!(f, "KNOCKOUT"),
        }
    }
}

/// Everything a session mutates, plus the tables derived from it. The
/// derived parts are rebuilt from scratch after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub stage: CompetitionStage,
    pub current_round: u8,
    pub group_matches: Vec<GroupMatch>,
    pub knockout: Bracket,
    pub table: LeagueTable,
    pub ties: Vec<KnockoutTie>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::KnockoutStage;

    #[test]
    fn test_stage_tags_are_uppercase() {
        assert_eq!(
            serde_json::to_string(&CompetitionStage::Knockout).unwrap(),
            "\"KNOCKOUT\""
        );
        assert_eq!(
            serde_json::to_string(&KnockoutStage::Quarter).unwrap(),
            "\"QUARTER\""
        );
    }

    #[test]
    fn test_state_survives_json() {
        let state = SessionState {
            stage: CompetitionStage::Group,
            current_round: 1,
            group_matches: vec![GroupMatch::new(1, 1, 1, 2)],
            knockout: Bracket::skeleton(),
            table: LeagueTable::default(),
            ties: Bracket::skeleton().ties(),
        };

        let json = serde_json::to_string(&state).unwrap();
        let restored: SessionState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, state);
    }
}

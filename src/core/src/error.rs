use crate::r#match::MatchId;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    GroupStageIncomplete { unplayed: usize },
    NotEnoughQualifiers { required: usize, available: usize },
    AlreadyInKnockout,
    MatchNotFound(MatchId),
    MatchNotReady(MatchId),
    RoundNotFound(u8),
    InvalidTeamCount(usize),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::GroupStageIncomplete { unplayed } => write!(
                f,
                "complete every round before the knockout stage ({} matches left)",
                unplayed
            ),
            SessionError::NotEnoughQualifiers {
                required,
                available,
            } => write!(
                f,
                "knockout stage needs {} qualified teams, only {} ranked",
                required, available
            ),
            SessionError::AlreadyInKnockout => write!(f, "knockout stage already started"),
            SessionError::MatchNotFound(id) => write!(f, "no match with id = {}", id),
            SessionError::MatchNotReady(id) => {
                write!(f, "match {} has no teams assigned yet", id)
            }
            SessionError::RoundNotFound(round) => write!(f, "no round {} in the schedule", round),
            SessionError::InvalidTeamCount(count) => write!(
                f,
                "group stage needs an even number of teams (at least 2), got {}",
                count
            ),
        }
    }
}

impl std::error::Error for SessionError {}

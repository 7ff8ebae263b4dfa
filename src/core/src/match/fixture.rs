use crate::r#match::{GroupMatch, KnockoutMatch, MatchId, Score};
use crate::team::TeamId;

/// Borrowed view over either kind of match, for callers that list
/// group and knockout fixtures together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture<'m> {
    Group(&'m GroupMatch),
    Knockout(&'m KnockoutMatch),
}

impl<'m> Fixture<'m> {
    pub fn id(&self) -> MatchId {
        match self {
            Fixture::Group(m) => m.id,
            Fixture::Knockout(m) => m.id,
        }
    }

    pub fn home_team_id(&self) -> Option<TeamId> {
        match self {
            Fixture::Group(m) => Some(m.home_team_id),
            Fixture::Knockout(m) => m.home_team_id,
        }
    }

    pub fn away_team_id(&self) -> Option<TeamId> {
        match self {
            Fixture::Group(m) => Some(m.away_team_id),
            Fixture::Knockout(m) => m.away_team_id,
        }
    }

    pub fn result(&self) -> Option<Score> {
        match self {
            Fixture::Group(m) => m.result,
            Fixture::Knockout(m) => m.result,
        }
    }

    pub fn is_played(&self) -> bool {
        self.result().is_some()
    }

    pub fn is_knockout(&self) -> bool {
        matches!(self, Fixture::Knockout(_))
    }
}

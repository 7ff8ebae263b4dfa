use crate::team::{Team, TeamId};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Immutable list of the clubs taking part in the competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCollection {
    pub teams: Vec<Team>,
}

impl TeamCollection {
    pub fn new(teams: Vec<Team>) -> Result<Self, String> {
        if teams.iter().map(|t| t.id).unique().count() != teams.len() {
            return Err(String::from("team ids should not contain duplicates"));
        }

        Ok(TeamCollection { teams })
    }

    /// Looks a team up by id. Unset ids resolve to `None`.
    pub fn by_id(&self, id: Option<TeamId>) -> Option<&Team> {
        let id = id?;
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn ids(&self) -> Vec<TeamId> {
        self.teams.iter().map(|t| t.id).collect()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }
}

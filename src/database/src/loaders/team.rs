use log::debug;
use serde::Deserialize;

const STATIC_TEAMS_JSON: &str = include_str!("../data/teams.json");

#[derive(Debug, Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub short_code: Option<String>,
}

pub struct TeamLoader;

impl TeamLoader {
    pub fn load() -> serde_json::Result<Vec<TeamEntity>> {
        let teams: Vec<TeamEntity> = serde_json::from_str(STATIC_TEAMS_JSON)?;

        debug!("teams loaded: {}", teams.len());

        Ok(teams)
    }
}

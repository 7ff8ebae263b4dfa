use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueSettings {
    /// Upper bound (inclusive) for randomly simulated goals per side.
    pub max_random_goals: u8,
    /// Table positions at the bottom that are relegated.
    pub relegation_places: usize,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        LeagueSettings {
            max_random_goals: 3,
            relegation_places: 4,
        }
    }
}

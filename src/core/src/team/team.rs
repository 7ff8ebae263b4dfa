use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type TeamId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub short_code: String,
}

impl Team {
    pub fn new(id: TeamId, name: String, short_code: String) -> Self {
        Team {
            id,
            name,
            short_code,
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.short_code)
    }
}

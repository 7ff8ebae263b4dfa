use crate::team::{Team, TeamId};

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<TeamId>,
    name: Option<String>,
    short_code: Option<String>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: TeamId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn short_code(mut self, short_code: String) -> Self {
        self.short_code = Some(short_code);
        self
    }

    pub fn build(self) -> Result<Team, String> {
        let name = self.name.ok_or("name is required")?;

        // Short code falls back to the first three letters of the name
        let short_code = match self.short_code {
            Some(code) => code,
            None => name.chars().take(3).collect::<String>().to_uppercase(),
        };

        Ok(Team {
            id: self.id.ok_or("id is required")?,
            name,
            short_code,
        })
    }
}

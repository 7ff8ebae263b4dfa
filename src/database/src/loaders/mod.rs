mod team;

pub use team::*;

pub struct DatabaseEntity {
    pub teams: Vec<TeamEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> serde_json::Result<DatabaseEntity> {
        Ok(DatabaseEntity {
            teams: TeamLoader::load()?,
        })
    }
}

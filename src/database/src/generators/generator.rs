use crate::DatabaseEntity;
use league_core::{TeamBuilder, TeamCollection};
use log::debug;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(data: &DatabaseEntity) -> Result<TeamCollection, String> {
        let teams = data
            .teams
            .iter()
            .map(|entity| {
                let mut builder = TeamBuilder::new()
                    .id(entity.id)
                    .name(entity.name.clone());

                if let Some(short_code) = &entity.short_code {
                    builder = builder.short_code(short_code.clone());
                }

                builder.build()
            })
            .collect::<Result<Vec<_>, String>>()?;

        debug!("teams generated: {}", teams.len());

        TeamCollection::new(teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DatabaseLoader, TeamEntity};

    #[test]
    fn test_generate_from_registry() {
        let database = DatabaseLoader::load().unwrap();
        let teams = DatabaseGenerator::generate(&database).unwrap();

        assert_eq!(teams.len(), 20);
        assert_eq!(teams.by_id(Some(2)).map(|t| t.short_code.as_str()), Some("REM"));
    }

    #[test]
    fn test_generate_fills_missing_short_code() {
        let database = DatabaseEntity {
            teams: vec![TeamEntity {
                id: 7,
                name: String::from("Floresta"),
                short_code: None,
            }],
        };

        let teams = DatabaseGenerator::generate(&database).unwrap();

        assert_eq!(teams.by_id(Some(7)).map(|t| t.short_code.as_str()), Some("FLO"));
    }

    #[test]
    fn test_generate_rejects_duplicate_ids() {
        let entity = |name: &str| TeamEntity {
            id: 1,
            name: String::from(name),
            short_code: None,
        };

        let database = DatabaseEntity {
            teams: vec![entity("Remo"), entity("Paysandu")],
        };

        assert!(DatabaseGenerator::generate(&database).is_err());
    }
}

pub mod loaders;

use core::{ClubProfile, Fixture, LineupError, Player, Roster};
use loaders::{ClubLoader, FixtureLoader, SquadLoader};
use log::info;

pub struct DatabaseEntity {
    pub club: ClubProfile,
    pub fixtures: Vec<Fixture>,
    pub roster: Roster,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, LineupError> {
        let club = ClubLoader::load();
        let fixtures = FixtureLoader::load();

        let players: Vec<Player> = SquadLoader::load()
            .into_iter()
            .map(|entity| entity.into_player())
            .collect();

        let roster = Roster::new(players)?;

        info!(
            "database loaded: club={}, fixtures={}, squad={} ({} starters)",
            club.short_name,
            fixtures.len(),
            roster.players().len(),
            roster.starter_count()
        );

        Ok(DatabaseEntity {
            club,
            fixtures,
            roster,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_loads_the_embedded_squad() {
        let database = DatabaseLoader::load().unwrap();

        assert_eq!(database.club.id, 65);
        assert_eq!(database.roster.players().len(), 29);
        assert_eq!(database.roster.starter_count(), 11);
        assert_eq!(database.fixtures.len(), 3);
    }

    #[test]
    fn test_every_squad_position_is_recognized() {
        use core::{Placement, PITCH_CENTER};

        // static data should never rely on the center fallback
        for entity in SquadLoader::load() {
            let placement = Placement::parse(&entity.position);
            assert_ne!(
                placement,
                Placement::Captured(PITCH_CENTER),
                "unrecognized position for {}",
                entity.id
            );
        }
    }

    #[test]
    fn test_squad_ids_are_unique() {
        let squad = SquadLoader::load();
        let mut ids: Vec<String> = squad.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), squad.len());
    }
}

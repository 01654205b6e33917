use chrono::NaiveDateTime;
use core::{Fixture, FixtureSide};
use serde::Deserialize;

const STATIC_FIXTURES_JSON: &str = include_str!("../data/fixtures.json");

#[derive(Deserialize)]
pub struct FixtureEntity {
    pub id: u32,
    pub home: FixtureSideEntity,
    pub away: FixtureSideEntity,
    pub stadium: String,
    pub kickoff: NaiveDateTime,
    pub score: Option<String>,
}

#[derive(Deserialize)]
pub struct FixtureSideEntity {
    pub name: String,
    pub crest_url: String,
}

pub struct FixtureLoader;

impl FixtureLoader {
    pub fn load() -> Vec<Fixture> {
        let entities: Vec<FixtureEntity> = serde_json::from_str(STATIC_FIXTURES_JSON).unwrap();

        entities
            .into_iter()
            .map(|entity| Fixture {
                id: entity.id,
                home: FixtureSide {
                    name: entity.home.name,
                    crest_url: entity.home.crest_url,
                },
                away: FixtureSide {
                    name: entity.away.name,
                    crest_url: entity.away.crest_url,
                },
                stadium: entity.stadium,
                kickoff: entity.kickoff,
                score: entity.score,
            })
            .collect()
    }
}

use core::ClubProfile;
use serde::Deserialize;

const STATIC_CLUB_JSON: &str = include_str!("../data/club.json");

#[derive(Deserialize)]
pub struct ClubEntity {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    pub crest_url: String,
    pub founded: u16,
    pub brazilian_titles: u8,
    pub libertadores_titles: u8,
    pub supporters_millions: u8,
}

pub struct ClubLoader;

impl ClubLoader {
    pub fn load() -> ClubProfile {
        let entity: ClubEntity = serde_json::from_str(STATIC_CLUB_JSON).unwrap();

        ClubProfile {
            id: entity.id,
            name: entity.name,
            short_name: entity.short_name,
            crest_url: entity.crest_url,
            founded: entity.founded,
            brazilian_titles: entity.brazilian_titles,
            libertadores_titles: entity.libertadores_titles,
            supporters_millions: entity.supporters_millions,
        }
    }
}

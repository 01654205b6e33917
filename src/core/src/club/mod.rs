use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Club metadata shown on the profile page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubProfile {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    pub crest_url: String,
    pub founded: u16,
    pub brazilian_titles: u8,
    pub libertadores_titles: u8,
    pub supporters_millions: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSide {
    pub name: String,
    pub crest_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u32,
    pub home: FixtureSide,
    pub away: FixtureSide,
    pub stadium: String,
    pub kickoff: NaiveDateTime,
    pub score: Option<String>,
}

impl Fixture {
    pub fn opponent_of(&self, club_name: &str) -> &FixtureSide {
        if self.home.name == club_name {
            &self.away
        } else {
            &self.home
        }
    }
}

/// The earliest fixture kicking off at or after `now`.
pub fn next_fixture(fixtures: &[Fixture], now: NaiveDateTime) -> Option<&Fixture> {
    fixtures
        .iter()
        .filter(|f| f.kickoff >= now)
        .sorted_by_key(|f| f.kickoff)
        .next()
}

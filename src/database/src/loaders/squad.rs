use core::{Placement, Player};
use serde::Deserialize;

const STATIC_SQUAD_JSON: &str = include_str!("../data/squad.json");

#[derive(Deserialize)]
pub struct SquadPlayerEntity {
    pub id: String,
    pub number: String,
    pub name: String,
    pub position: String,
    pub starter: bool,
}

impl SquadPlayerEntity {
    pub fn into_player(self) -> Player {
        Player {
            id: self.id,
            number: self.number,
            name: self.name,
            placement: Placement::parse(&self.position),
            starter: self.starter,
        }
    }
}

pub struct SquadLoader;

impl SquadLoader {
    pub fn load() -> Vec<SquadPlayerEntity> {
        serde_json::from_str(STATIC_SQUAD_JSON).unwrap()
    }
}

use crate::field::Placement;
use serde::{Deserialize, Serialize};

/// A squad member. Identity (`id`) is assigned once at roster construction
/// and never changes; interactions only ever exchange `placement` and
/// `starter` between records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub number: String,
    pub name: String,
    pub placement: Placement,
    pub starter: bool,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        number: impl Into<String>,
        name: impl Into<String>,
        placement: Placement,
        starter: bool,
    ) -> Self {
        Player {
            id: id.into(),
            number: number.into(),
            name: name.into(),
            placement,
            starter,
        }
    }
}

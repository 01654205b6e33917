pub mod controller;
pub mod player;
pub mod roster;

pub use controller::{
    DragState, DropOutcome, LineupState, Notice, StarterSnapshot, TapOutcome, NOTICE_DURATION,
};
pub use player::Player;
pub use roster::{Roster, MAX_STARTERS};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineupError {
    UnknownPlayer(String),
    TooManyStarters(usize),
}

impl fmt::Display for LineupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineupError::UnknownPlayer(id) => write!(f, "unknown player: {}", id),
            LineupError::TooManyStarters(count) => write!(
                f,
                "squad lists {} starters, at most {} allowed",
                count, MAX_STARTERS
            ),
        }
    }
}

impl std::error::Error for LineupError {}

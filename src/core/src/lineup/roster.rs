use super::{LineupError, Player};

pub const MAX_STARTERS: usize = 11;

/// The ordered squad list. All mutation goes through [`Roster::apply`],
/// which rebuilds the collection so consumers can detect change by
/// comparing snapshots instead of chasing aliased state.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Builds a roster from the squad source, rejecting squads that already
    /// violate the starting-eleven cap.
    pub fn new(players: Vec<Player>) -> Result<Roster, LineupError> {
        let starters = players.iter().filter(|p| p.starter).count();
        if starters > MAX_STARTERS {
            return Err(LineupError::TooManyStarters(starters));
        }

        Ok(Roster { players })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The eleven (or fewer) players currently on the pitch, in roster order.
    pub fn starters(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.starter).collect()
    }

    pub fn bench(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| !p.starter).collect()
    }

    pub fn starter_count(&self) -> usize {
        self.players.iter().filter(|p| p.starter).count()
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Produces a new roster by mapping every player through `transform`.
    /// The original collection is left untouched.
    pub fn apply<F>(&self, transform: F) -> Roster
    where
        F: Fn(&Player) -> Player,
    {
        Roster {
            players: self.players.iter().map(transform).collect(),
        }
    }
}

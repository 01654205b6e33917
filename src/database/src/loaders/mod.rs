pub mod club;
pub mod fixture;
pub mod squad;

pub use club::ClubLoader;
pub use fixture::FixtureLoader;
pub use squad::{SquadLoader, SquadPlayerEntity};

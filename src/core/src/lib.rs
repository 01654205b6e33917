pub mod club;
pub mod field;
pub mod lineup;

pub use club::{next_fixture, ClubProfile, Fixture, FixtureSide};
pub use field::{
    Placement, PitchBounds, PitchCoordinate, PointerPosition, SlotCode, PITCH_CENTER,
    SLOT_POSITIONING,
};
pub use lineup::{
    DragState, DropOutcome, LineupError, LineupState, Notice, Player, Roster, StarterSnapshot,
    TapOutcome, MAX_STARTERS, NOTICE_DURATION,
};

pub mod coordinates;
pub mod slots;

pub use coordinates::{PitchBounds, PitchCoordinate, PointerPosition, PITCH_CENTER};
pub use slots::{Placement, SlotCode, SLOT_POSITIONING};

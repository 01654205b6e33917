use crate::field::{PitchCoordinate, PITCH_CENTER};

/// The fixed formation roles a player can occupy on the pitch diagram.
#[derive(Copy, Debug, Eq, PartialEq, Clone, Hash)]
pub enum SlotCode {
    Goalkeeper,
    DefenderLeft,
    DefenderCenterLeft,
    DefenderCenterRight,
    DefenderRight,
    DefensiveMidfielder,
    MidfielderLeft,
    MidfielderCenter,
    MidfielderRight,
    AttackingMidfielder,
    ForwardRight,
    Striker,
    ForwardCenter,
    ForwardLeft,
}

/// Default pitch coordinates (percent of width/height) for every slot.
pub const SLOT_POSITIONING: &[(SlotCode, (f32, f32))] = &[
    (SlotCode::Goalkeeper, (10.0, 50.0)),
    (SlotCode::DefenderLeft, (25.0, 15.0)),
    (SlotCode::DefenderCenterLeft, (25.0, 35.0)),
    (SlotCode::DefenderCenterRight, (30.0, 65.0)),
    (SlotCode::DefenderRight, (24.0, 87.0)),
    (SlotCode::DefensiveMidfielder, (55.0, 35.0)),
    (SlotCode::MidfielderLeft, (70.0, 75.0)),
    (SlotCode::MidfielderCenter, (55.0, 64.0)),
    (SlotCode::MidfielderRight, (60.0, 75.0)),
    (SlotCode::AttackingMidfielder, (60.0, 50.0)),
    (SlotCode::ForwardRight, (80.0, 25.0)),
    (SlotCode::Striker, (80.0, 35.0)),
    (SlotCode::ForwardCenter, (84.0, 50.0)),
    (SlotCode::ForwardLeft, (80.0, 75.0)),
];

impl SlotCode {
    pub fn all() -> Vec<SlotCode> {
        SLOT_POSITIONING.iter().map(|(slot, _)| *slot).collect()
    }

    pub fn from_code(code: &str) -> Option<SlotCode> {
        match code {
            "GK" => Some(SlotCode::Goalkeeper),
            "LB" => Some(SlotCode::DefenderLeft),
            "CB1" => Some(SlotCode::DefenderCenterLeft),
            "CB2" => Some(SlotCode::DefenderCenterRight),
            "RB" => Some(SlotCode::DefenderRight),
            "DM" => Some(SlotCode::DefensiveMidfielder),
            "LM" => Some(SlotCode::MidfielderLeft),
            "CM" => Some(SlotCode::MidfielderCenter),
            "RM" => Some(SlotCode::MidfielderRight),
            "AM" => Some(SlotCode::AttackingMidfielder),
            "RW" => Some(SlotCode::ForwardRight),
            "ST" => Some(SlotCode::Striker),
            "CF" => Some(SlotCode::ForwardCenter),
            "LW" => Some(SlotCode::ForwardLeft),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SlotCode::Goalkeeper => "GK",
            SlotCode::DefenderLeft => "LB",
            SlotCode::DefenderCenterLeft => "CB1",
            SlotCode::DefenderCenterRight => "CB2",
            SlotCode::DefenderRight => "RB",
            SlotCode::DefensiveMidfielder => "DM",
            SlotCode::MidfielderLeft => "LM",
            SlotCode::MidfielderCenter => "CM",
            SlotCode::MidfielderRight => "RM",
            SlotCode::AttackingMidfielder => "AM",
            SlotCode::ForwardRight => "RW",
            SlotCode::Striker => "ST",
            SlotCode::ForwardCenter => "CF",
            SlotCode::ForwardLeft => "LW",
        }
    }

    pub fn coordinate(&self) -> PitchCoordinate {
        SLOT_POSITIONING
            .iter()
            .find(|(slot, _)| slot == self)
            .map(|(_, (x, y))| PitchCoordinate::new(*x, *y))
            .unwrap_or(PITCH_CENTER)
    }
}

const CAPTURED_PREFIX: &str = "CUSTOM_";

/// A player's placement on the pitch: either one of the fixed formation
/// slots, or a free-form coordinate captured from a drag-and-drop.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Placement {
    Slot(SlotCode),
    Captured(PitchCoordinate),
}

impl Placement {
    /// Parses the wire form: a slot code such as `"GK"`, or a captured tag
    /// such as `"CUSTOM_37_62"`. Unknown codes and malformed tags fall back
    /// to the pitch center so a single bad record never blocks rendering.
    pub fn parse(raw: &str) -> Placement {
        if let Some(rest) = raw.strip_prefix(CAPTURED_PREFIX) {
            let mut parts = rest.splitn(2, '_');
            if let (Some(x), Some(y)) = (parts.next(), parts.next()) {
                if let (Ok(x), Ok(y)) = (x.parse::<f32>(), y.parse::<f32>()) {
                    return Placement::Captured(PitchCoordinate::new(x, y));
                }
            }

            return Placement::Captured(PITCH_CENTER);
        }

        match SlotCode::from_code(raw) {
            Some(slot) => Placement::Slot(slot),
            None => Placement::Captured(PITCH_CENTER),
        }
    }

    pub fn encode(&self) -> String {
        match self {
            Placement::Slot(slot) => slot.code().to_string(),
            Placement::Captured(point) => {
                format!(
                    "{}{}_{}",
                    CAPTURED_PREFIX,
                    point.x.round() as i32,
                    point.y.round() as i32
                )
            }
        }
    }

    pub fn coordinate(&self) -> PitchCoordinate {
        match self {
            Placement::Slot(slot) => slot.coordinate(),
            Placement::Captured(point) => *point,
        }
    }
}

impl From<String> for Placement {
    fn from(raw: String) -> Self {
        Placement::parse(&raw)
    }
}

impl From<Placement> for String {
    fn from(placement: Placement) -> Self {
        placement.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_slot_resolves_within_pitch_bounds() {
        for slot in SlotCode::all() {
            let point = slot.coordinate();

            assert!((0.0..=100.0).contains(&point.x), "{} x", slot.code());
            assert!((0.0..=100.0).contains(&point.y), "{} y", slot.code());
        }
    }

    #[test]
    fn test_slot_codes_round_trip() {
        for slot in SlotCode::all() {
            assert_eq!(SlotCode::from_code(slot.code()), Some(slot));
        }
    }

    #[test]
    fn test_goalkeeper_slot_coordinate() {
        assert_eq!(
            SlotCode::Goalkeeper.coordinate(),
            PitchCoordinate::new(10.0, 50.0)
        );
    }

    #[test]
    fn test_unknown_slot_code_falls_back_to_center() {
        assert_eq!(
            Placement::parse("XYZ").coordinate(),
            PITCH_CENTER
        );
    }

    #[test]
    fn test_captured_tag_parses_embedded_coordinates() {
        let placement = Placement::parse("CUSTOM_37_62");

        assert_eq!(placement, Placement::Captured(PitchCoordinate::new(37.0, 62.0)));
    }

    #[test]
    fn test_malformed_captured_tags_fall_back_to_center() {
        for raw in ["CUSTOM_", "CUSTOM_12", "CUSTOM_a_b", "CUSTOM__"] {
            assert_eq!(Placement::parse(raw).coordinate(), PITCH_CENTER, "{}", raw);
        }
    }

    #[test]
    fn test_captured_placement_encodes_rounded_percentages() {
        let placement = Placement::Captured(PitchCoordinate::new(36.6, 61.5));

        assert_eq!(placement.encode(), "CUSTOM_37_62");
    }

    #[test]
    fn test_slot_placement_encodes_its_code() {
        assert_eq!(Placement::Slot(SlotCode::Striker).encode(), "ST");
    }
}

use serde::{Deserialize, Serialize};

/// A point on the pitch surface, expressed as percentages of the pitch
/// rectangle with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchCoordinate {
    pub x: f32,
    pub y: f32,
}

pub const PITCH_CENTER: PitchCoordinate = PitchCoordinate { x: 50.0, y: 50.0 };

impl PitchCoordinate {
    pub fn new(x: f32, y: f32) -> Self {
        PitchCoordinate { x, y }
    }

    /// Converts a pixel-space pointer position into pitch percentages.
    ///
    /// Values outside 0..100 are passed through, so a drop near the
    /// touchline can record a slight overhang.
    pub fn from_pointer(pointer: PointerPosition, bounds: &PitchBounds) -> PitchCoordinate {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return PITCH_CENTER;
        }

        PitchCoordinate {
            x: (pointer.x - bounds.left) / bounds.width * 100.0,
            y: (pointer.y - bounds.top) / bounds.height * 100.0,
        }
    }

    pub fn rounded(&self) -> PitchCoordinate {
        PitchCoordinate {
            x: self.x.round(),
            y: self.y.round(),
        }
    }
}

/// Pointer position in pixel space, as reported by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

/// Bounding rectangle of the pitch surface in pixel space. The view layer
/// measures this on every drag event; the core never touches the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> PitchBounds {
        PitchBounds {
            left: 100.0,
            top: 50.0,
            width: 800.0,
            height: 500.0,
        }
    }

    #[test]
    fn test_pointer_in_the_middle_of_the_pitch() {
        let point =
            PitchCoordinate::from_pointer(PointerPosition { x: 500.0, y: 300.0 }, &bounds());

        assert_eq!(point, PitchCoordinate::new(50.0, 50.0));
    }

    #[test]
    fn test_pointer_at_the_top_left_corner() {
        let point =
            PitchCoordinate::from_pointer(PointerPosition { x: 100.0, y: 50.0 }, &bounds());

        assert_eq!(point, PitchCoordinate::new(0.0, 0.0));
    }

    #[test]
    fn test_pointer_outside_bounds_is_not_clamped() {
        let point = PitchCoordinate::from_pointer(PointerPosition { x: 60.0, y: 600.0 }, &bounds());

        assert!(point.x < 0.0);
        assert!(point.y > 100.0);
    }

    #[test]
    fn test_degenerate_bounds_fall_back_to_center() {
        let degenerate = PitchBounds {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
        };

        let point =
            PitchCoordinate::from_pointer(PointerPosition { x: 10.0, y: 10.0 }, &degenerate);

        assert_eq!(point, PITCH_CENTER);
    }

    #[test]
    fn test_rounding_drops_fractional_percentages() {
        let point = PitchCoordinate::new(37.4, 61.6).rounded();

        assert_eq!(point, PitchCoordinate::new(37.0, 62.0));
    }
}

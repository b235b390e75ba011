use serde::{Deserialize, Serialize};

/// Named color-temperature presets. `Cold` and `Warm` target fixed white
/// points in Kelvin; `Original` leaves the image untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    Original,
    Cold,
    Warm,
}

impl FilterKind {
    pub fn kelvin_target(self) -> Option<f32> {
        match self {
            Self::Original => None,
            Self::Cold => Some(4500.0),
            Self::Warm => Some(8500.0),
        }
    }
}

/// Rotation in degrees, kept normalized to `[0, 360)`. Stepping left from
/// zero wraps to 270 rather than going negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationAngle(f32);

impl RotationAngle {
    pub const ZERO: Self = Self(0.0);

    pub fn new(degrees: f32) -> Self {
        if !degrees.is_finite() {
            return Self::ZERO;
        }
        Self(degrees.rem_euclid(360.0))
    }

    pub fn degrees(self) -> f32 {
        self.0
    }

    pub fn rotated_left(self) -> Self {
        Self::new(self.0 - 90.0)
    }

    pub fn rotated_right(self) -> Self {
        Self::new(self.0 + 90.0)
    }

    /// `Some(0..=3)` when the angle is an exact multiple of 90 degrees.
    pub fn quarter_turns(self) -> Option<u32> {
        if self.0 % 90.0 == 0.0 {
            Some(((self.0 / 90.0) as u32) % 4)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kelvin_targets_match_presets() {
        assert_eq!(FilterKind::Original.kelvin_target(), None);
        assert_eq!(FilterKind::Cold.kelvin_target(), Some(4500.0));
        assert_eq!(FilterKind::Warm.kelvin_target(), Some(8500.0));
    }

    #[test]
    fn left_from_zero_wraps_to_270() {
        assert_eq!(RotationAngle::ZERO.rotated_left().degrees(), 270.0);
    }

    #[test]
    fn four_right_turns_return_to_start() {
        let start = RotationAngle::new(90.0);
        let back = start
            .rotated_right()
            .rotated_right()
            .rotated_right()
            .rotated_right();
        assert_eq!(back, start);
    }

    #[test]
    fn new_normalizes_into_range() {
        assert_eq!(RotationAngle::new(450.0).degrees(), 90.0);
        assert_eq!(RotationAngle::new(-90.0).degrees(), 270.0);
        assert_eq!(RotationAngle::new(360.0).degrees(), 0.0);
    }

    #[test]
    fn non_finite_input_collapses_to_zero() {
        assert_eq!(RotationAngle::new(f32::NAN), RotationAngle::ZERO);
        assert_eq!(RotationAngle::new(f32::INFINITY), RotationAngle::ZERO);
    }

    #[test]
    fn quarter_turns_detects_exact_multiples() {
        assert_eq!(RotationAngle::new(270.0).quarter_turns(), Some(3));
        assert_eq!(RotationAngle::new(45.0).quarter_turns(), None);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Volume value object for question audio playback.

use crate::config::{DEFAULT_VOLUME, MAX_VOLUME, MIN_VOLUME};

/// Playback volume, guaranteed to be within 0.0–1.0 inclusive.
///
/// # Example
///
/// ```
/// use iced_quiz::domain::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range. NaN maps to silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(MIN_VOLUME);
        }
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Gain applied to samples. Squaring gives a perceptually even slider.
    #[must_use]
    pub fn gain(self) -> f32 {
        self.0 * self.0
    }

    /// Whole percent, for display.
    #[must_use]
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_abs_diff_eq!(Volume::new(-0.5).value(), MIN_VOLUME);
        assert_abs_diff_eq!(Volume::new(1.5).value(), MAX_VOLUME);
        assert_abs_diff_eq!(Volume::new(0.5).value(), 0.5);
        assert_abs_diff_eq!(Volume::new(f32::NAN).value(), MIN_VOLUME);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_abs_diff_eq!(Volume::new(0.0).value(), 0.0);
        assert_abs_diff_eq!(Volume::new(1.0).value(), 1.0);
    }

    #[test]
    fn default_is_expected_volume() {
        assert_abs_diff_eq!(Volume::default().value(), DEFAULT_VOLUME);
    }

    #[test]
    fn gain_is_perceptual() {
        assert_abs_diff_eq!(Volume::new(0.5).gain(), 0.25);
        assert_abs_diff_eq!(Volume::new(1.0).gain(), 1.0);
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(Volume::new(0.8).percent(), 80);
        assert_eq!(Volume::new(0.333).percent(), 33);
    }
}

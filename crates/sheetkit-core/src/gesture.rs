#![forbid(unsafe_code)]

//! Touch-drag samples.
//!
//! A [`GestureSample`] records where a touch began and where it was last
//! seen. It is an immutable value: every touch event produces a new sample
//! rather than patching one field, so the two coordinates can never drift
//! out of step.

/// Start and most recent Y coordinate of one touch drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureSample {
    /// Y coordinate of the touch-start, in viewport pixels.
    pub start_y: f64,
    /// Y coordinate of the last processed touch sample.
    pub last_y: f64,
}

impl GestureSample {
    /// Sample for a touch that just started at `y`.
    #[inline]
    #[must_use]
    pub const fn begin(y: f64) -> Self {
        Self {
            start_y: y,
            last_y: y,
        }
    }

    /// The same gesture, now last seen at `y`.
    #[inline]
    #[must_use]
    pub const fn moved_to(self, y: f64) -> Self {
        Self {
            start_y: self.start_y,
            last_y: y,
        }
    }

    /// Total displacement from the origin (positive = downward).
    #[inline]
    #[must_use]
    pub fn displacement(&self) -> f64 {
        self.last_y - self.start_y
    }

    /// Incremental step from the last sample to `y`.
    #[inline]
    #[must_use]
    pub fn step_to(&self, y: f64) -> f64 {
        y - self.last_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_sets_both_coordinates() {
        let s = GestureSample::begin(120.0);
        assert_eq!(s.start_y, 120.0);
        assert_eq!(s.last_y, 120.0);
        assert_eq!(s.displacement(), 0.0);
    }

    #[test]
    fn moved_to_keeps_origin() {
        let s = GestureSample::begin(100.0).moved_to(130.0).moved_to(170.0);
        assert_eq!(s.start_y, 100.0);
        assert_eq!(s.last_y, 170.0);
        assert_eq!(s.displacement(), 70.0);
    }

    #[test]
    fn step_is_relative_to_last_sample() {
        let s = GestureSample::begin(100.0).moved_to(130.0);
        assert_eq!(s.step_to(125.0), -5.0);
        assert_eq!(s.step_to(150.0), 20.0);
    }

    #[test]
    fn upward_displacement_is_negative() {
        let s = GestureSample::begin(300.0).moved_to(220.0);
        assert_eq!(s.displacement(), -80.0);
    }
}

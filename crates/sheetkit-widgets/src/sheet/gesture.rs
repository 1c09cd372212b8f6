//! Touch tracking and offset proposals.
//!
//! The two variants read drags differently:
//!
//! - **Default** only cares how far the finger is from where it started. The
//!   proposal is the displacement *before* the current sample is recorded,
//!   and only downward displacement produces a proposal.
//! - **Snap** accumulates the step since the previous sample onto the live
//!   offset and clamps into `[0, max_height]`, so the finger can sweep back
//!   and forth across snap zones.

use sheetkit_core::geometry::clamp_offset;
use sheetkit_core::gesture::GestureSample;

use super::VariantKind;

/// Tracks the active touch and proposes offsets for it.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureTracker {
    kind: VariantKind,
    sample: Option<GestureSample>,
}

impl GestureTracker {
    /// Tracker for the given variant, with no active touch.
    #[must_use]
    pub const fn new(kind: VariantKind) -> Self {
        Self { kind, sample: None }
    }

    /// Variant this tracker proposes offsets for.
    #[must_use]
    pub const fn kind(&self) -> VariantKind {
        self.kind
    }

    /// Current sample, if a touch is active.
    #[must_use]
    pub const fn sample(&self) -> Option<GestureSample> {
        self.sample
    }

    /// Whether a touch is active.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.sample.is_some()
    }

    /// Begin a new touch at `y`, discarding any previous one.
    pub fn start(&mut self, y: f64) {
        self.sample = Some(GestureSample::begin(y));
    }

    /// Record a move to `y` and return the proposed offset, if any.
    ///
    /// `current` is the sheet's live offset and `max_height` the viewport
    /// height; only the snap variant uses them.
    pub fn propose_move(&mut self, y: f64, current: f64, max_height: f64) -> Option<f64> {
        let sample = self.sample?;
        self.sample = Some(sample.moved_to(y));
        match self.kind {
            VariantKind::Default => {
                let delta = sample.displacement();
                (delta > 0.0).then_some(delta)
            }
            VariantKind::Snap => {
                let step = sample.step_to(y);
                Some(clamp_offset(0.0, max_height, current + step))
            }
        }
    }

    /// End the active touch, returning its final sample.
    pub fn finish(&mut self) -> Option<GestureSample> {
        self.sample.take()
    }
}

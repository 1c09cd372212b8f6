#![forbid(unsafe_code)]

//! Viewport tracking.
//!
//! [`ViewportMonitor`] keeps the most recent [`ViewportSample`] and derives
//! [`ViewportMetrics`] from it on demand. Metrics are never cached: every
//! read is a pure function of the latest sample and the static fallback
//! height, so two identical samples always yield identical metrics.
//!
//! # Failure Modes
//!
//! - A host without a visual viewport API reports `visual_height: None`; the
//!   monitor falls back to the configured static screen height.
//! - A non-finite or negative visual height is treated the same way.

use crate::event::ViewportSample;

/// Default static screen height used when no visual viewport is available.
pub const DEFAULT_FALLBACK_HEIGHT: f64 = 800.0;

/// Usable viewport geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportMetrics {
    /// Height the sheet may occupy, in pixels.
    pub max_height: f64,
    /// Scroll offset of the visual viewport.
    pub scroll_offset: f64,
}

/// Tracks the latest viewport sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportMonitor {
    fallback_height: f64,
    latest: ViewportSample,
}

impl Default for ViewportMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_HEIGHT)
    }
}

impl ViewportMonitor {
    /// Create a monitor with no sample yet; metrics use `fallback_height`.
    #[must_use]
    pub fn new(fallback_height: f64) -> Self {
        Self {
            fallback_height: sanitize_fallback(fallback_height),
            latest: ViewportSample::unavailable(),
        }
    }

    /// Create a monitor seeded with an initial sample.
    #[must_use]
    pub fn with_sample(fallback_height: f64, sample: ViewportSample) -> Self {
        Self {
            fallback_height: sanitize_fallback(fallback_height),
            latest: sample,
        }
    }

    /// Static height used when the visual viewport is unavailable.
    #[must_use]
    pub fn fallback_height(&self) -> f64 {
        self.fallback_height
    }

    /// The most recent raw sample.
    #[must_use]
    pub fn latest_sample(&self) -> ViewportSample {
        self.latest
    }

    /// Metrics derived from the latest sample.
    #[must_use]
    pub fn current_metrics(&self) -> ViewportMetrics {
        let max_height = match self.latest.visual_height {
            Some(h) if h.is_finite() && h >= 0.0 => h,
            _ => self.fallback_height,
        };
        let scroll_offset = if self.latest.scroll_offset.is_finite() {
            self.latest.scroll_offset
        } else {
            0.0
        };
        ViewportMetrics {
            max_height,
            scroll_offset,
        }
    }

    /// Record a resize notification and return the recomputed metrics.
    pub fn on_resize(&mut self, sample: ViewportSample) -> ViewportMetrics {
        self.latest = sample;
        let metrics = self.current_metrics();
        crate::trace!(
            max_height = metrics.max_height,
            scroll_offset = metrics.scroll_offset,
            fallback = sample.visual_height.is_none(),
            "viewport recomputed"
        );
        metrics
    }
}

fn sanitize_fallback(height: f64) -> f64 {
    if height.is_finite() && height >= 0.0 {
        height
    } else {
        DEFAULT_FALLBACK_HEIGHT
    }
}

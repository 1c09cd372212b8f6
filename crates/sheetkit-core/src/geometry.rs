#![forbid(unsafe_code)]

//! Offset geometry: clamping and derived content height.
//!
//! All values are CSS-style pixels measured downward from the sheet's
//! fully-open position. Both functions are pure and never panic.

/// Number of handle-bar heights reserved above the scrollable content area.
pub const HANDLE_BAR_RESERVE_FACTOR: f64 = 8.0;

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: if `max < min` the result is
/// `min`, and a `NaN` value resolves to `min`.
#[inline]
#[must_use]
pub fn clamp_offset(min: f64, max: f64, value: f64) -> f64 {
    if value.is_nan() || max < min {
        return min;
    }
    value.max(min).min(max)
}

/// Height available to the sheet's scrollable body.
///
/// `max_height - handle_bar_height * 8 - translate`. The result is not
/// clamped; a sheet dragged far down reports a negative height.
#[inline]
#[must_use]
pub fn content_height(max_height: f64, handle_bar_height: f64, translate: f64) -> f64 {
    max_height - handle_bar_height * HANDLE_BAR_RESERVE_FACTOR - translate
}

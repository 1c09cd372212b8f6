//! Snap-point computation and nearest-point resolution.
//!
//! Stored order is `[0, largest, ..., smallest]`. Resolution walks that
//! order and only replaces the current best on a strictly smaller distance,
//! so ties go to the earlier point: `0` beats every positive point, and a
//! larger point beats a smaller one.

use std::iter;

use super::{SheetError, SnapContext, SnapSpec};

/// Ordered snap points for one viewport height.
///
/// The leading `0` is implicit and always present, so a set can never be
/// empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SnapPointSet {
    descending: Vec<f64>,
}

impl SnapPointSet {
    /// Build from caller-supplied points in any order.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = f64>) -> Self {
        let mut descending: Vec<f64> = points.into_iter().collect();
        descending.sort_by(|a, b| b.total_cmp(a));
        Self { descending }
    }

    /// Evaluate `spec` for `max_height`.
    #[must_use]
    pub fn compute(max_height: f64, spec: &SnapSpec) -> Self {
        Self::from_points(spec.snap_points(SnapContext { max_height }))
    }

    /// Points in stored order, starting with `0`.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        iter::once(0.0).chain(self.descending.iter().copied())
    }

    /// Points in stored order, collected.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Number of points including the implicit `0`.
    #[must_use]
    pub fn count(&self) -> usize {
        self.descending.len() + 1
    }

    /// Position of `point` in stored order.
    #[must_use]
    pub fn index_of(&self, point: f64) -> Option<usize> {
        self.iter().position(|p| p == point)
    }

    /// Point closest to `current`.
    #[must_use]
    pub fn resolve_closest(&self, current: f64) -> f64 {
        closest(0.0, self.descending.iter().copied(), current)
    }
}

/// Point in `points` closest to `current`, scanning in slice order.
///
/// `points` is expected in stored order (see [`SnapPointSet::iter`]).
pub fn resolve_closest(current: f64, points: &[f64]) -> Result<f64, SheetError> {
    let (&first, rest) = points.split_first().ok_or(SheetError::EmptySnapPoints)?;
    Ok(closest(first, rest.iter().copied(), current))
}

fn closest(first: f64, rest: impl Iterator<Item = f64>, current: f64) -> f64 {
    let mut best = first;
    let mut best_distance = (first - current).abs();
    for point in rest {
        let distance = (point - current).abs();
        if distance < best_distance {
            best = point;
            best_distance = distance;
        }
    }
    best
}

/// Initial offset of a snap sheet.
///
/// A default point equal to `max_height` means fully open (offset `0`);
/// otherwise the offset is `max_height - default_point`.
#[must_use]
pub fn default_offset(max_height: f64, spec: &SnapSpec) -> f64 {
    let point = spec.default_snap_point(SnapContext { max_height });
    if point == max_height {
        0.0
    } else {
        max_height - point
    }
}

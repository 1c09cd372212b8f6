use std::fmt;

/// Input handed to caller-supplied snap functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapContext {
    /// Current usable viewport height.
    pub max_height: f64,
}

type SnapPointsFn = Box<dyn Fn(SnapContext) -> Vec<f64>>;
type DefaultSnapPointFn = Box<dyn Fn(SnapContext) -> f64>;

/// Caller-supplied snap geometry for [`SheetVariant::Snap`].
///
/// Points are *visible heights*: a point `p` places the sheet's top edge `p`
/// pixels above the viewport bottom, i.e. at offset `max_height - p`. Both
/// functions are re-evaluated whenever the viewport height changes and are
/// expected to be pure. Points outside `[0, max_height]` are not rejected.
pub struct SnapSpec {
    snap_points: SnapPointsFn,
    default_snap_point: DefaultSnapPointFn,
}

impl fmt::Debug for SnapSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapSpec").finish_non_exhaustive()
    }
}

impl SnapSpec {
    /// Build from a snap-point generator and a default-point function.
    pub fn new(
        snap_points: impl Fn(SnapContext) -> Vec<f64> + 'static,
        default_snap_point: impl Fn(SnapContext) -> f64 + 'static,
    ) -> Self {
        Self {
            snap_points: Box::new(snap_points),
            default_snap_point: Box::new(default_snap_point),
        }
    }

    /// Fixed pixel points independent of the viewport.
    pub fn fixed(points: Vec<f64>, default_point: f64) -> Self {
        Self::new(move |_| points.clone(), move |_| default_point)
    }

    /// Points given as fractions of the viewport height.
    pub fn fractions(fractions: Vec<f64>, default_fraction: f64) -> Self {
        Self::new(
            move |ctx| fractions.iter().map(|f| f * ctx.max_height).collect(),
            move |ctx| default_fraction * ctx.max_height,
        )
    }

    /// Evaluate the snap-point generator.
    pub fn snap_points(&self, ctx: SnapContext) -> Vec<f64> {
        (self.snap_points)(ctx)
    }

    /// Evaluate the default-point function.
    pub fn default_snap_point(&self, ctx: SnapContext) -> f64 {
        (self.default_snap_point)(ctx)
    }
}

/// Drag policy of a sheet, fixed for its lifetime.
#[derive(Debug, Default)]
pub enum SheetVariant {
    /// Drag down past the close threshold to dismiss.
    #[default]
    Default,
    /// Settle on the nearest snap point on release.
    Snap(SnapSpec),
}

impl SheetVariant {
    /// Shorthand for `SheetVariant::Snap(SnapSpec::new(..))`.
    pub fn snap(
        snap_points: impl Fn(SnapContext) -> Vec<f64> + 'static,
        default_snap_point: impl Fn(SnapContext) -> f64 + 'static,
    ) -> Self {
        Self::Snap(SnapSpec::new(snap_points, default_snap_point))
    }

    /// Variant discriminant without the snap functions.
    #[must_use]
    pub fn kind(&self) -> VariantKind {
        match self {
            Self::Default => VariantKind::Default,
            Self::Snap(_) => VariantKind::Snap,
        }
    }

    /// Snap geometry, if this is the snap variant.
    #[must_use]
    pub fn snap_spec(&self) -> Option<&SnapSpec> {
        match self {
            Self::Default => None,
            Self::Snap(spec) => Some(spec),
        }
    }
}

/// Discriminant of [`SheetVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum VariantKind {
    /// Dismiss-by-distance.
    #[default]
    Default,
    /// Snap points.
    Snap,
}

impl VariantKind {
    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Snap => "snap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ignores_viewport() {
        let spec = SnapSpec::fixed(vec![100.0, 300.0], 300.0);
        let ctx = SnapContext { max_height: 900.0 };
        assert_eq!(spec.snap_points(ctx), vec![100.0, 300.0]);
        assert_eq!(spec.default_snap_point(ctx), 300.0);
    }

    #[test]
    fn fractions_scale_with_viewport() {
        let spec = SnapSpec::fractions(vec![0.25, 0.5], 1.0);
        let ctx = SnapContext { max_height: 800.0 };
        assert_eq!(spec.snap_points(ctx), vec![200.0, 400.0]);
        assert_eq!(spec.default_snap_point(ctx), 800.0);
    }

    #[test]
    fn kind_and_spec_accessors() {
        assert_eq!(SheetVariant::Default.kind(), VariantKind::Default);
        assert!(SheetVariant::Default.snap_spec().is_none());
        let v = SheetVariant::snap(|_| vec![10.0], |_| 10.0);
        assert_eq!(v.kind(), VariantKind::Snap);
        assert!(v.snap_spec().is_some());
        assert_eq!(VariantKind::Snap.name(), "snap");
    }

    #[test]
    fn debug_does_not_require_fn_debug() {
        let v = SheetVariant::Snap(SnapSpec::fixed(vec![], 0.0));
        assert!(format!("{v:?}").contains("SnapSpec"));
    }
}

#![forbid(unsafe_code)]

//! Canonical input events for a bottom sheet.
//!
//! Hosts translate their native callbacks (touch listeners, visual-viewport
//! resize, transition-end, overlay clicks, prop changes) into [`SheetEvent`]
//! values and hand them to the sheet in delivery order.

/// Raw viewport reading delivered with a resize notification.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSample {
    /// Visual viewport height, or `None` when the host has no visual
    /// viewport API.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visual_height: Option<f64>,
    /// Vertical scroll offset of the visual viewport.
    #[cfg_attr(feature = "serde", serde(default))]
    pub scroll_offset: f64,
}

impl ViewportSample {
    /// Sample with a known visual height and no scroll offset.
    #[must_use]
    pub const fn visual(height: f64) -> Self {
        Self {
            visual_height: Some(height),
            scroll_offset: 0.0,
        }
    }

    /// Sample from a host without a visual viewport API.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            visual_height: None,
            scroll_offset: 0.0,
        }
    }

    /// Set the scroll offset.
    #[must_use]
    pub const fn with_scroll_offset(mut self, offset: f64) -> Self {
        self.scroll_offset = offset;
        self
    }
}

/// Input event consumed by a bottom sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum SheetEvent {
    /// A finger touched down on the sheet.
    TouchStart {
        /// Touch Y in viewport pixels.
        y: f64,
    },
    /// The active finger moved.
    TouchMove {
        /// Touch Y in viewport pixels.
        y: f64,
    },
    /// The active finger lifted.
    TouchEnd,
    /// The viewport changed size or scrolled.
    ViewportResize(ViewportSample),
    /// The host's `close_requested` signal changed value.
    CloseRequested {
        /// New value of the signal.
        requested: bool,
    },
    /// The backdrop outside the sheet content was clicked.
    BackdropClick,
    /// The renderer finished playing the close transition.
    CloseTransitionEnd,
}

impl SheetEvent {
    /// Short stable name, used for span and log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TouchStart { .. } => "touch_start",
            Self::TouchMove { .. } => "touch_move",
            Self::TouchEnd => "touch_end",
            Self::ViewportResize(_) => "viewport_resize",
            Self::CloseRequested { .. } => "close_requested",
            Self::BackdropClick => "backdrop_click",
            Self::CloseTransitionEnd => "close_transition_end",
        }
    }

    /// Whether this is one of the touch-lifecycle events.
    #[must_use]
    pub const fn is_touch(&self) -> bool {
        matches!(
            self,
            Self::TouchStart { .. } | Self::TouchMove { .. } | Self::TouchEnd
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_distinct() {
        let events = [
            SheetEvent::TouchStart { y: 0.0 },
            SheetEvent::TouchMove { y: 0.0 },
            SheetEvent::TouchEnd,
            SheetEvent::ViewportResize(ViewportSample::unavailable()),
            SheetEvent::CloseRequested { requested: true },
            SheetEvent::BackdropClick,
            SheetEvent::CloseTransitionEnd,
        ];
        let mut names: Vec<_> = events.iter().map(SheetEvent::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), events.len());
    }

    #[test]
    fn touch_classification() {
        assert!(SheetEvent::TouchStart { y: 1.0 }.is_touch());
        assert!(SheetEvent::TouchEnd.is_touch());
        assert!(!SheetEvent::BackdropClick.is_touch());
        assert!(!SheetEvent::ViewportResize(ViewportSample::visual(500.0)).is_touch());
    }

    #[test]
    fn sample_builders() {
        let s = ViewportSample::visual(640.0).with_scroll_offset(12.0);
        assert_eq!(s.visual_height, Some(640.0));
        assert_eq!(s.scroll_offset, 12.0);
        assert_eq!(ViewportSample::default(), ViewportSample::unavailable());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_tagged_representation() {
        let json = r#"{"type":"touch_move","y":42.0}"#;
        let ev: SheetEvent = serde_json::from_str(json).unwrap();
        assert_eq!(ev, SheetEvent::TouchMove { y: 42.0 });

        let json = r#"{"type":"viewport_resize","visual_height":700.0}"#;
        let ev: SheetEvent = serde_json::from_str(json).unwrap();
        assert_eq!(ev, SheetEvent::ViewportResize(ViewportSample::visual(700.0)));

        let json = r#"{"type":"close_requested","requested":true}"#;
        let ev: SheetEvent = serde_json::from_str(json).unwrap();
        assert_eq!(ev, SheetEvent::CloseRequested { requested: true });
    }
}

//! The bottom-sheet orchestrator.

use std::fmt;

use bitflags::bitflags;
use sheetkit_core::event::{SheetEvent, ViewportSample};
use sheetkit_core::geometry::{clamp_offset, content_height};
use sheetkit_core::scroll_lock::{ScrollLock, ScrollLockGuard};
use sheetkit_core::viewport::{ViewportMetrics, ViewportMonitor};

use super::snap::{SnapPointSet, default_offset};
use super::{GestureTracker, SheetConfig, SheetError, SheetVariant, VariantKind};

// ============================================================================
// State
// ============================================================================

/// Lifecycle state of a sheet.
///
/// `Snapping` is `Idle` with the settling flag raised: the renderer should
/// use its settling transition until the next touch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SheetState {
    /// At rest.
    #[default]
    Idle,
    /// A touch is in progress.
    Dragging,
    /// At rest after settling on a snap point.
    Snapping,
    /// Dismissal transition playing.
    Closing,
    /// Dismissed. Terminal.
    Closed,
}

impl SheetState {
    /// Whether touch and viewport events still affect geometry.
    #[inline]
    pub fn accepts_input(self) -> bool {
        !matches!(self, Self::Closing | Self::Closed)
    }

    /// Whether the sheet is closing or closed.
    #[inline]
    pub fn is_dismissing(self) -> bool {
        matches!(self, Self::Closing | Self::Closed)
    }
}

bitflags! {
    /// Presentation fields changed by one handler call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SheetChanges: u8 {
        /// The translate value moved.
        const TRANSLATE = 1 << 0;
        /// The lifecycle state changed.
        const STATE = 1 << 1;
        /// The content-area height changed.
        const CONTENT_HEIGHT = 1 << 2;
        /// The sheet reached `Closed` and `on_close` ran.
        const CLOSED = 1 << 3;
    }
}

/// Snapshot the renderer draws from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetPresentation {
    /// Vertical offset from fully open, in pixels.
    pub translate: f64,
    /// Play the dismissal transition.
    pub is_closing: bool,
    /// Use the settling transition.
    pub is_snapping: bool,
    /// Height of the scrollable content area.
    pub content_height: f64,
    /// Lifecycle state.
    pub state: SheetState,
}

// ============================================================================
// Host collaborators
// ============================================================================

/// An element that can take input focus.
pub trait Focusable {
    /// Give this element focus again.
    fn focus(&mut self);
}

/// Rendering-side collaborator notified during viewport recomputation.
pub trait SheetHost {
    /// Resize the scrollable content area.
    fn set_content_height(&mut self, height: f64);

    /// The element holding input focus, if any.
    fn focused_element(&mut self) -> Option<&mut dyn Focusable> {
        None
    }
}

/// Host that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl SheetHost for NullHost {
    fn set_content_height(&mut self, _height: f64) {}
}

// ============================================================================
// BottomSheet
// ============================================================================

/// Draggable bottom sheet.
///
/// Created by [`mount`](Self::mount), which freezes page scrolling. Driven by
/// [`handle_event`](Self::handle_event) or the individual handlers. Every
/// handler returns the [`SheetChanges`] it produced; an empty set means the
/// event was ignored.
pub struct BottomSheet<L: ScrollLock> {
    config: SheetConfig,
    variant: SheetVariant,
    state: SheetState,
    translate: f64,
    max_height: f64,
    content_height: f64,
    snap_points: Option<SnapPointSet>,
    settled_point: Option<f64>,
    gesture: GestureTracker,
    viewport: ViewportMonitor,
    scroll_lock: ScrollLockGuard<L>,
    on_close: Option<Box<dyn FnOnce()>>,
    close_signal: bool,
}

impl<L: ScrollLock> fmt::Debug for BottomSheet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BottomSheet")
            .field("variant", &self.variant.kind())
            .field("state", &self.state)
            .field("translate", &self.translate)
            .field("max_height", &self.max_height)
            .field("scroll_locked", &self.scroll_lock.is_held())
            .finish()
    }
}

impl<L: ScrollLock> BottomSheet<L> {
    /// Mount a sheet: validate config, freeze page scrolling, and compute
    /// the initial geometry from `initial`.
    ///
    /// A snap sheet starts at its default snap point; a default sheet starts
    /// fully open.
    pub fn mount(
        config: SheetConfig,
        variant: SheetVariant,
        initial: ViewportSample,
        scroll_lock: L,
        on_close: impl FnOnce() + 'static,
    ) -> Result<Self, SheetError> {
        config.validate()?;
        let scroll_lock = ScrollLockGuard::acquire(scroll_lock)?;
        let viewport = ViewportMonitor::with_sample(config.fallback_height, initial);
        let max_height = viewport.current_metrics().max_height;

        let (snap_points, translate, settled_point) = match variant.snap_spec() {
            Some(spec) => {
                let points = SnapPointSet::compute(max_height, spec);
                let translate = clamp_offset(0.0, max_height, default_offset(max_height, spec));
                let settled = max_height - translate;
                (Some(points), translate, Some(settled))
            }
            None => (None, 0.0, None),
        };

        let sheet = Self {
            config,
            gesture: GestureTracker::new(variant.kind()),
            variant,
            state: SheetState::Idle,
            translate,
            max_height,
            content_height: content_height(max_height, config.handle_bar_height, translate),
            snap_points,
            settled_point,
            viewport,
            scroll_lock,
            on_close: Some(Box::new(on_close)),
            close_signal: false,
        };
        sheetkit_core::debug!(
            variant = sheet.variant.kind().name(),
            max_height,
            translate,
            "sheet mounted"
        );
        Ok(sheet)
    }

    // --- Accessors ---

    /// Configuration in effect.
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Drag policy.
    pub fn variant(&self) -> &SheetVariant {
        &self.variant
    }

    /// Lifecycle state.
    pub fn state(&self) -> SheetState {
        self.state
    }

    /// Current offset from fully open.
    pub fn translate(&self) -> f64 {
        self.translate
    }

    /// Current usable viewport height.
    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    /// Latest viewport metrics.
    pub fn viewport_metrics(&self) -> ViewportMetrics {
        self.viewport.current_metrics()
    }

    /// Height last computed for the content area.
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Snap points for the current viewport (snap variant only).
    pub fn snap_points(&self) -> Option<&SnapPointSet> {
        self.snap_points.as_ref()
    }

    /// Snap point the sheet last settled on (snap variant only).
    pub fn settled_snap_point(&self) -> Option<f64> {
        self.settled_point
    }

    /// Active gesture tracker.
    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// Whether the dismissal transition is playing.
    pub fn is_closing(&self) -> bool {
        self.state == SheetState::Closing
    }

    /// Whether the settling transition should be used.
    pub fn is_snapping(&self) -> bool {
        self.state == SheetState::Snapping
    }

    /// Whether the sheet has been dismissed.
    pub fn is_closed(&self) -> bool {
        self.state == SheetState::Closed
    }

    /// Whether this sheet still holds the page scroll lock.
    pub fn holds_scroll_lock(&self) -> bool {
        self.scroll_lock.is_held()
    }

    /// The host scroll lock.
    pub fn scroll_lock(&self) -> &L {
        self.scroll_lock.lock()
    }

    /// Snapshot for the renderer.
    pub fn presentation(&self) -> SheetPresentation {
        SheetPresentation {
            translate: self.translate,
            is_closing: self.is_closing(),
            is_snapping: self.is_snapping(),
            content_height: self.content_height,
            state: self.state,
        }
    }

    // --- Event handling ---

    /// Dispatch one event.
    pub fn handle_event(&mut self, event: &SheetEvent, host: &mut dyn SheetHost) -> SheetChanges {
        let _span = sheetkit_core::debug_span!(
            "sheet.event",
            kind = event.name(),
            state = ?self.state
        )
        .entered();

        match *event {
            SheetEvent::TouchStart { y } => self.touch_start(y),
            SheetEvent::TouchMove { y } => self.touch_move(y),
            SheetEvent::TouchEnd => self.touch_end(),
            SheetEvent::ViewportResize(sample) => self.viewport_changed(sample, host),
            SheetEvent::CloseRequested { requested } => self.set_close_requested(requested),
            SheetEvent::BackdropClick => self.backdrop_clicked(),
            SheetEvent::CloseTransitionEnd => self.close_transition_finished(),
        }
    }

    /// A touch began at `y`. Interrupts any settling transition.
    pub fn touch_start(&mut self, y: f64) -> SheetChanges {
        if !self.state.accepts_input() {
            return SheetChanges::empty();
        }
        self.gesture.start(y);
        self.set_state(SheetState::Dragging)
    }

    /// The active touch moved to `y`.
    pub fn touch_move(&mut self, y: f64) -> SheetChanges {
        if self.state != SheetState::Dragging {
            return SheetChanges::empty();
        }
        match self.gesture.propose_move(y, self.translate, self.max_height) {
            Some(proposed) => self.set_translate(proposed),
            None => SheetChanges::empty(),
        }
    }

    /// The active touch lifted.
    pub fn touch_end(&mut self) -> SheetChanges {
        if self.state != SheetState::Dragging {
            return SheetChanges::empty();
        }
        let Some(sample) = self.gesture.finish() else {
            return self.set_state(SheetState::Idle);
        };

        match self.variant.kind() {
            VariantKind::Default => {
                if sample.displacement() > self.config.close_threshold {
                    sheetkit_core::debug!(
                        displacement = sample.displacement(),
                        threshold = self.config.close_threshold,
                        "drag past threshold"
                    );
                    self.enter_closing()
                } else {
                    self.set_translate(0.0) | self.set_state(SheetState::Idle)
                }
            }
            VariantKind::Snap => {
                let current_point = self.max_height - sample.last_y;
                let closest = self
                    .snap_points
                    .as_ref()
                    .map_or(0.0, |points| points.resolve_closest(current_point));
                sheetkit_core::debug!(current_point, closest, "snap resolved");
                if closest == 0.0 {
                    self.enter_closing()
                } else {
                    self.settled_point = Some(closest);
                    let translate =
                        clamp_offset(0.0, self.max_height, self.max_height - closest);
                    self.set_translate(translate) | self.set_state(SheetState::Snapping)
                }
            }
        }
    }

    /// The viewport changed; recompute geometry and notify `host`.
    ///
    /// Snap points are re-derived for the new height, the offset is clamped
    /// into the new range, the content height is reported, and focus is
    /// re-asserted on the focused element.
    pub fn viewport_changed(
        &mut self,
        sample: ViewportSample,
        host: &mut dyn SheetHost,
    ) -> SheetChanges {
        if !self.state.accepts_input() {
            return SheetChanges::empty();
        }
        let metrics = self.viewport.on_resize(sample);
        self.max_height = metrics.max_height;
        if let Some(spec) = self.variant.snap_spec() {
            self.snap_points = Some(SnapPointSet::compute(self.max_height, spec));
        }

        let changes = self.set_translate(clamp_offset(0.0, self.max_height, self.translate))
            | self.refresh_content_height();
        host.set_content_height(self.content_height);
        if let Some(element) = host.focused_element() {
            element.focus();
        }
        changes
    }

    /// Update the `close_requested` signal; a false-to-true edge closes.
    pub fn set_close_requested(&mut self, requested: bool) -> SheetChanges {
        let rising = requested && !self.close_signal;
        self.close_signal = requested;
        if rising {
            self.enter_closing()
        } else {
            SheetChanges::empty()
        }
    }

    /// Request dismissal from outside the gesture system.
    pub fn request_close(&mut self) -> SheetChanges {
        self.enter_closing()
    }

    /// The backdrop was clicked; same as [`request_close`](Self::request_close).
    pub fn backdrop_clicked(&mut self) -> SheetChanges {
        self.enter_closing()
    }

    /// The renderer finished the dismissal transition.
    ///
    /// Ignored unless the sheet is `Closing`; settling transitions also end
    /// and must not close the sheet.
    pub fn close_transition_finished(&mut self) -> SheetChanges {
        if self.state != SheetState::Closing {
            return SheetChanges::empty();
        }
        let mut changes = self.set_state(SheetState::Closed);
        self.scroll_lock.release();
        if let Some(on_close) = self.on_close.take() {
            on_close();
            changes |= SheetChanges::CLOSED;
        }
        changes
    }

    // --- Internals ---

    fn enter_closing(&mut self) -> SheetChanges {
        if self.state.is_dismissing() {
            return SheetChanges::empty();
        }
        self.gesture.finish();
        self.set_state(SheetState::Closing)
    }

    fn set_state(&mut self, state: SheetState) -> SheetChanges {
        if self.state == state {
            return SheetChanges::empty();
        }
        sheetkit_core::debug!(from = ?self.state, to = ?state, "sheet state");
        self.state = state;
        SheetChanges::STATE
    }

    fn set_translate(&mut self, translate: f64) -> SheetChanges {
        if self.translate == translate {
            return SheetChanges::empty();
        }
        self.translate = translate;
        SheetChanges::TRANSLATE | self.refresh_content_height()
    }

    /// Content height follows `max_height` and `translate`.
    fn refresh_content_height(&mut self) -> SheetChanges {
        let height = content_height(
            self.max_height,
            self.config.handle_bar_height,
            self.translate,
        );
        if height == self.content_height {
            return SheetChanges::empty();
        }
        self.content_height = height;
        SheetChanges::CONTENT_HEIGHT
    }
}

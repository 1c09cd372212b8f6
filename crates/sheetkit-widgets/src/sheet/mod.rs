#![forbid(unsafe_code)]

//! Bottom sheet: gesture-to-position state machine.
//!
//! A [`BottomSheet`] owns the sheet's vertical offset (its *translate
//! value*) and lifecycle [`SheetState`]. Hosts feed it
//! [`SheetEvent`](sheetkit_core::event::SheetEvent)s in delivery order and
//! read back a [`SheetPresentation`] to render.
//!
//! Two variants exist:
//!
//! - [`SheetVariant::Default`]: drag down past a threshold to dismiss,
//!   otherwise spring back to fully open.
//! - [`SheetVariant::Snap`]: release settles on the nearest snap point;
//!   settling on the implicit `0` point dismisses.
//!
//! # State Machine
//!
//! ```text
//! Idle/Snapping --touch start--> Dragging --touch end--> Idle | Snapping | Closing
//! any non-terminal --close request / backdrop--> Closing --transition end--> Closed
//! ```
//!
//! # Invariants
//!
//! - Outside a default-variant drag, `0 <= translate <= max_height`.
//! - The snap-point set always starts with `0`.
//! - `content_height` is recomputed whenever `translate` or `max_height`
//!   changes.
//! - `on_close` runs at most once; the scroll lock is released exactly once.
//! - `Closed` is terminal.

mod config;
mod error;
mod gesture;
mod snap;
mod state;
mod variant;

pub use config::{CLOSE_THRESHOLD, DEFAULT_HANDLE_BAR_HEIGHT, SheetConfig};
pub use error::SheetError;
pub use gesture::GestureTracker;
pub use snap::{SnapPointSet, default_offset, resolve_closest};
pub use state::{
    BottomSheet, Focusable, NullHost, SheetChanges, SheetHost, SheetPresentation, SheetState,
};
pub use variant::{SheetVariant, SnapContext, SnapSpec, VariantKind};

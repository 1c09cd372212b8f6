#![forbid(unsafe_code)]

//! Core: touch events, viewport metrics, offset geometry, and the scroll lock.
//!
//! # Role in SheetKit
//! `sheetkit-core` is the input layer. It owns the normalized event type that
//! hosts feed into a sheet, the viewport monitor that turns raw viewport
//! samples into metrics, the pure offset helpers, and the scoped guard around
//! the page scroll lock.
//!
//! # How it fits in the system
//! `sheetkit-widgets` consumes these types and implements the bottom-sheet
//! state machine on top of them. Nothing here knows about snap points or
//! dismissal policy.

pub mod event;
pub mod geometry;
pub mod gesture;
pub mod logging;
pub mod scroll_lock;
pub mod viewport;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};

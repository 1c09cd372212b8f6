#![forbid(unsafe_code)]

//! Widgets for SheetKit.
//!
//! The only widget today is the draggable [`sheet::BottomSheet`]: a panel
//! anchored to the bottom of the viewport that either dismisses on a
//! threshold drag or settles onto discrete snap points.

pub mod sheet;

pub use sheet::{
    BottomSheet, Focusable, NullHost, SheetChanges, SheetConfig, SheetError, SheetHost,
    SheetPresentation, SheetState, SheetVariant, SnapContext, SnapPointSet, SnapSpec,
    VariantKind,
};

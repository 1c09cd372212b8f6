use std::fmt;

use sheetkit_core::scroll_lock::ScrollLockHeld;

/// Errors produced by sheet construction and snap resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetError {
    /// Snap resolution was asked to pick from an empty candidate list.
    EmptySnapPoints,
    /// Another sheet on this thread already holds the page scroll lock.
    ScrollLockHeld,
    /// A configuration value was rejected.
    InvalidConfig(String),
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySnapPoints => write!(f, "cannot resolve a snap point from an empty set"),
            Self::ScrollLockHeld => write!(f, "page scroll lock is already held"),
            Self::InvalidConfig(msg) => write!(f, "invalid sheet config: {msg}"),
        }
    }
}

impl std::error::Error for SheetError {}

impl From<ScrollLockHeld> for SheetError {
    fn from(_: ScrollLockHeld) -> Self {
        Self::ScrollLockHeld
    }
}

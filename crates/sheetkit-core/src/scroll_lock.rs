#![forbid(unsafe_code)]

//! Scoped page scroll lock.
//!
//! While a sheet is open the page behind it must not scroll. The host
//! supplies a [`ScrollLock`] implementation (capture the scroll offset and
//! pin the page on `freeze`, restore it on `release`). [`ScrollLockGuard`]
//! wraps it so that:
//!
//! - `freeze` runs exactly once, when the guard is acquired;
//! - `release` runs exactly once, either explicitly or when the guard drops;
//! - only one guard per event-loop thread may be held at a time.
//!
//! # Failure Modes
//!
//! - Acquiring while another guard on the same thread is held returns
//!   [`ScrollLockHeld`] and does not call `freeze`.

use std::cell::Cell;
use std::fmt;

thread_local! {
    static SCROLL_LOCK_HELD: Cell<bool> = const { Cell::new(false) };
}

/// Host hook that freezes and restores page scrolling.
pub trait ScrollLock {
    /// Capture the current scroll offset and pin the page.
    fn freeze(&mut self);
    /// Restore the captured scroll offset and unpin the page.
    fn release(&mut self);
}

impl<L: ScrollLock + ?Sized> ScrollLock for Box<L> {
    fn freeze(&mut self) {
        (**self).freeze();
    }

    fn release(&mut self) {
        (**self).release();
    }
}

/// Scroll lock that does nothing, for hosts without a scrollable page.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScrollLock;

impl ScrollLock for NoopScrollLock {
    fn freeze(&mut self) {}
    fn release(&mut self) {}
}

/// Error returned when the scroll lock is already held on this thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLockHeld;

impl fmt::Display for ScrollLockHeld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page scroll lock is already held by another sheet")
    }
}

impl std::error::Error for ScrollLockHeld {}

/// Whether a [`ScrollLockGuard`] is currently held on this thread.
#[must_use]
pub fn is_scroll_locked() -> bool {
    SCROLL_LOCK_HELD.with(Cell::get)
}

/// RAII guard over a [`ScrollLock`].
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: L,
    held: bool,
}

impl<L: ScrollLock> fmt::Debug for ScrollLockGuard<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard")
            .field("held", &self.held)
            .finish()
    }
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    /// Freeze page scrolling and take the per-thread lock.
    pub fn acquire(mut lock: L) -> Result<Self, ScrollLockHeld> {
        if SCROLL_LOCK_HELD.with(|held| held.replace(true)) {
            crate::warn!("scroll lock acquisition refused: already held");
            return Err(ScrollLockHeld);
        }
        lock.freeze();
        crate::debug!("scroll lock acquired");
        Ok(Self { lock, held: true })
    }

    /// Whether this guard still holds the lock.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Access the wrapped host lock.
    #[must_use]
    pub fn lock(&self) -> &L {
        &self.lock
    }

    /// Restore page scrolling.
    ///
    /// Returns `true` if this call released the lock, `false` if it had
    /// already been released.
    pub fn release(&mut self) -> bool {
        if !self.held {
            return false;
        }
        self.held = false;
        self.lock.release();
        SCROLL_LOCK_HELD.with(|held| held.set(false));
        crate::debug!("scroll lock released");
        true
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.release();
    }
}

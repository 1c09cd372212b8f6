#![forbid(unsafe_code)]

//! Simulated collaborators: page scroll lock and rendering host.

use std::cell::Cell;
use std::rc::Rc;

use sheetkit_core::scroll_lock::ScrollLock;
use sheetkit_widgets::{Focusable, SheetHost};

/// Shared record of what a [`RecordingScrollLock`] did to the page.
#[derive(Debug, Default)]
pub struct LockLedger {
    freezes: Cell<u32>,
    releases: Cell<u32>,
    page_offset: Cell<f64>,
    captured_offset: Cell<Option<f64>>,
}

impl LockLedger {
    /// Number of `freeze` calls.
    pub fn freezes(&self) -> u32 {
        self.freezes.get()
    }

    /// Number of `release` calls.
    pub fn releases(&self) -> u32 {
        self.releases.get()
    }

    /// Whether the page is currently pinned.
    pub fn is_pinned(&self) -> bool {
        self.captured_offset.get().is_some()
    }

    /// Current page scroll offset.
    pub fn page_offset(&self) -> f64 {
        self.page_offset.get()
    }

    /// User scrolls the page; ignored while pinned.
    pub fn scroll_page_to(&self, offset: f64) {
        if !self.is_pinned() {
            self.page_offset.set(offset);
        }
    }
}

/// Scroll lock that pins a simulated page and records every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingScrollLock {
    ledger: Rc<LockLedger>,
}

impl RecordingScrollLock {
    /// Lock over a page currently scrolled to `page_offset`.
    pub fn new(page_offset: f64) -> Self {
        let ledger = LockLedger::default();
        ledger.page_offset.set(page_offset);
        Self {
            ledger: Rc::new(ledger),
        }
    }

    /// Shared handle to the ledger; stays valid after the lock moves into a
    /// sheet.
    pub fn ledger(&self) -> Rc<LockLedger> {
        Rc::clone(&self.ledger)
    }
}

impl ScrollLock for RecordingScrollLock {
    fn freeze(&mut self) {
        let l = &self.ledger;
        l.freezes.set(l.freezes.get() + 1);
        l.captured_offset.set(Some(l.page_offset.get()));
    }

    fn release(&mut self) {
        let l = &self.ledger;
        l.releases.set(l.releases.get() + 1);
        if let Some(offset) = l.captured_offset.take() {
            l.page_offset.set(offset);
        }
    }
}

/// A text input that counts how often focus was re-asserted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedInput {
    /// Number of `focus` calls.
    pub focus_count: u32,
}

impl Focusable for SimulatedInput {
    fn focus(&mut self) {
        self.focus_count += 1;
    }
}

/// Rendering host that records content-height reports.
#[derive(Debug, Clone, Default)]
pub struct SimulatedHost {
    content_heights: Vec<f64>,
    focused: Option<SimulatedInput>,
}

impl SimulatedHost {
    /// Host with nothing focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with a focused text input inside the sheet.
    pub fn with_focused_input() -> Self {
        Self {
            content_heights: Vec::new(),
            focused: Some(SimulatedInput::default()),
        }
    }

    /// Every content height reported so far, in order.
    pub fn content_heights(&self) -> &[f64] {
        &self.content_heights
    }

    /// Most recent content height.
    pub fn last_content_height(&self) -> Option<f64> {
        self.content_heights.last().copied()
    }

    /// How often focus was re-asserted on the focused input.
    pub fn refocus_count(&self) -> u32 {
        self.focused.map_or(0, |input| input.focus_count)
    }

    /// Drop focus from the input.
    pub fn blur(&mut self) {
        self.focused = None;
    }
}

impl SheetHost for SimulatedHost {
    fn set_content_height(&mut self, height: f64) {
        self.content_heights.push(height);
    }

    fn focused_element(&mut self) -> Option<&mut dyn Focusable> {
        self.focused.as_mut().map(|input| input as &mut dyn Focusable)
    }
}

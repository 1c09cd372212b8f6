#![forbid(unsafe_code)]

//! Headless harness for SheetKit.
//!
//! - [`host`]: a recording scroll lock and a simulated rendering host.
//! - [`script`]: deterministic touch sequences, from single drags to seeded
//!   storms.
//! - [`replay`]: run a JSON script against a sheet and emit a JSONL trace.
//!
//! The `sheet-replay` binary wraps [`replay`] for use from the shell.

pub mod error;
pub mod host;
pub mod replay;
pub mod script;

pub use error::HarnessError;
pub use host::{LockLedger, RecordingScrollLock, SimulatedHost, SimulatedInput};
pub use replay::{ReplayOutcome, ReplayRecord, ReplayScript, ReplaySummary, VariantScript};
pub use script::{DragScript, StormConfig, touch_storm};

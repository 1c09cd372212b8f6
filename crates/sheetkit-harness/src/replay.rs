#![forbid(unsafe_code)]

//! Replay a JSON script against a sheet and emit a JSONL trace.
//!
//! Script shape:
//!
//! ```json
//! {
//!   "config": { "close_threshold": 50.0 },
//!   "variant": { "kind": "snap", "points": [0.25, 0.5, 1.0], "default_point": 0.5, "unit": "fraction" },
//!   "viewport": { "visual_height": 800.0 },
//!   "events": [ { "type": "touch_start", "y": 100.0 }, { "type": "touch_end" } ]
//! }
//! ```
//!
//! Every field is optional. The trace holds one `sheet_step` record per event
//! followed by a single `replay_complete` summary.

use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use sheetkit_core::event::{SheetEvent, ViewportSample};
use sheetkit_widgets::{
    BottomSheet, SheetChanges, SheetConfig, SheetPresentation, SheetState, SheetVariant, SnapSpec,
};

use crate::error::Result;
use crate::host::{RecordingScrollLock, SimulatedHost};

/// Parsed replay input.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplayScript {
    pub config: SheetConfig,
    pub variant: VariantScript,
    pub viewport: ViewportSample,
    pub events: Vec<SheetEvent>,
}

/// Serializable description of a [`SheetVariant`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VariantScript {
    #[default]
    Default,
    Snap {
        points: Vec<f64>,
        default_point: f64,
        #[serde(default)]
        unit: PointUnit,
    },
}

/// How snap values in a script are expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointUnit {
    /// Absolute pixels.
    #[default]
    Px,
    /// Fractions of the available height.
    Fraction,
}

impl VariantScript {
    /// Build the runtime variant.
    pub fn into_variant(self) -> SheetVariant {
        match self {
            Self::Default => SheetVariant::Default,
            Self::Snap {
                points,
                default_point,
                unit: PointUnit::Px,
            } => SheetVariant::Snap(SnapSpec::fixed(points, default_point)),
            Self::Snap {
                points,
                default_point,
                unit: PointUnit::Fraction,
            } => SheetVariant::Snap(SnapSpec::fractions(points, default_point)),
        }
    }
}

/// One trace line per event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayRecord {
    pub event: &'static str,
    pub index: usize,
    pub kind: &'static str,
    pub changes: Vec<String>,
    #[serde(flatten)]
    pub presentation: SheetPresentation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_snap_point: Option<f64>,
}

/// Final trace line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub event: &'static str,
    pub steps: usize,
    pub final_state: SheetState,
    pub on_close_calls: u32,
    pub lock_freezes: u32,
    pub lock_releases: u32,
    pub content_height_reports: usize,
}

/// Everything a replay produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    pub records: Vec<ReplayRecord>,
    pub summary: ReplaySummary,
}

impl ReplayOutcome {
    /// Write the trace as JSON lines.
    pub fn write_jsonl(&self, out: &mut impl Write) -> Result<()> {
        for record in &self.records {
            serde_json::to_writer(&mut *out, record)?;
            out.write_all(b"\n")?;
        }
        serde_json::to_writer(&mut *out, &self.summary)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }

    /// The trace as a single string.
    pub fn to_jsonl(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_jsonl(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Parse a script from JSON text.
pub fn parse(json: &str) -> Result<ReplayScript> {
    Ok(serde_json::from_str(json)?)
}

/// Mount a sheet per `script`, feed it every event and collect the trace.
///
/// The sheet is unmounted before returning, so the lock ledger in the
/// summary always reflects a completed freeze/release pair.
pub fn run(script: ReplayScript) -> Result<ReplayOutcome> {
    let lock = RecordingScrollLock::default();
    let ledger = lock.ledger();
    let on_close_calls = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&on_close_calls);

    let mut sheet = BottomSheet::mount(
        script.config,
        script.variant.into_variant(),
        script.viewport,
        lock,
        move || counter.set(counter.get() + 1),
    )?;
    let mut host = SimulatedHost::new();
    tracing::info!(events = script.events.len(), "replay started");

    let records: Vec<ReplayRecord> = script
        .events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let changes = sheet.handle_event(event, &mut host);
            ReplayRecord {
                event: "sheet_step",
                index,
                kind: event.name(),
                changes: change_names(changes),
                presentation: sheet.presentation(),
                settled_snap_point: sheet.settled_snap_point(),
            }
        })
        .collect();

    let final_state = sheet.state();
    drop(sheet);

    let summary = ReplaySummary {
        event: "replay_complete",
        steps: records.len(),
        final_state,
        on_close_calls: on_close_calls.get(),
        lock_freezes: ledger.freezes(),
        lock_releases: ledger.releases(),
        content_height_reports: host.content_heights().len(),
    };
    tracing::info!(steps = summary.steps, state = ?final_state, "replay complete");
    Ok(ReplayOutcome { records, summary })
}

fn change_names(changes: SheetChanges) -> Vec<String> {
    changes
        .iter_names()
        .map(|(name, _)| name.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HarnessError;

    #[test]
    fn empty_script_uses_defaults() {
        let script = parse("{}").unwrap();
        assert_eq!(script, ReplayScript::default());
        let outcome = run(script).unwrap();
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.summary.final_state, SheetState::Idle);
        assert_eq!(outcome.summary.lock_freezes, 1);
        assert_eq!(outcome.summary.lock_releases, 1);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            parse(r#"{"evnts": []}"#),
            Err(HarnessError::Json(_))
        ));
    }

    #[test]
    fn invalid_config_surfaces_sheet_error() {
        let script = parse(r#"{"config": {"close_threshold": -1.0}}"#).unwrap();
        assert!(matches!(run(script), Err(HarnessError::Sheet(_))));
    }

    #[test]
    fn default_dismissal_trace() {
        let json = r#"{
            "viewport": {"visual_height": 800.0},
            "events": [
                {"type": "touch_start", "y": 100.0},
                {"type": "touch_move", "y": 140.0},
                {"type": "touch_move", "y": 200.0},
                {"type": "touch_end"},
                {"type": "close_transition_end"}
            ]
        }"#;
        let outcome = run(parse(json).unwrap()).unwrap();
        let states: Vec<_> = outcome
            .records
            .iter()
            .map(|r| r.presentation.state)
            .collect();
        assert_eq!(
            states,
            vec![
                SheetState::Dragging,
                SheetState::Dragging,
                SheetState::Dragging,
                SheetState::Closing,
                SheetState::Closed
            ]
        );
        assert_eq!(outcome.summary.on_close_calls, 1);
        assert_eq!(outcome.records[4].changes, vec!["state", "closed"]);
    }

    #[test]
    fn snap_fraction_variant_settles() {
        let json = r#"{
            "variant": {"kind": "snap", "points": [0.25, 0.5, 1.0], "default_point": 0.5, "unit": "fraction"},
            "viewport": {"visual_height": 800.0},
            "events": [
                {"type": "touch_start", "y": 400.0},
                {"type": "touch_move", "y": 180.0},
                {"type": "touch_end"}
            ]
        }"#;
        let outcome = run(parse(json).unwrap()).unwrap();
        let last = outcome.records.last().unwrap();
        assert_eq!(last.presentation.state, SheetState::Snapping);
        // Release point is measured from the bottom: 800 - 180 = 620, nearest 800.
        assert_eq!(last.settled_snap_point, Some(800.0));
        assert_eq!(last.presentation.translate, 0.0);
        assert_eq!(outcome.records[1].presentation.translate, 180.0);
    }

    #[test]
    fn jsonl_lines_are_valid_json() {
        let json = r#"{"events": [{"type": "backdrop_click"}, {"type": "close_transition_end"}]}"#;
        let text = run(parse(json).unwrap()).unwrap().to_jsonl().unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in &lines {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(v["event"].is_string());
        }
        let summary: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(summary["event"], "replay_complete");
        assert_eq!(summary["final_state"], "closed");
    }
}

#![forbid(unsafe_code)]

//! Storm replays are deterministic and never break the sheet's invariants.

use proptest::prelude::*;
use sheetkit_core::event::ViewportSample;
use sheetkit_harness::replay::{self, ReplayScript, VariantScript};
use sheetkit_harness::{DragScript, StormConfig, touch_storm};
use sheetkit_widgets::{SheetConfig, SheetState};

fn snap_variant() -> VariantScript {
    serde_json::from_str(
        r#"{"kind": "snap", "points": [0.2, 0.6, 1.0], "default_point": 0.6, "unit": "fraction"}"#,
    )
    .unwrap()
}

fn storm_script(seed: u64, variant: VariantScript) -> ReplayScript {
    let config = StormConfig {
        seed,
        gestures: 40,
        ..StormConfig::default()
    };
    ReplayScript {
        config: SheetConfig::default(),
        variant,
        viewport: ViewportSample::visual(800.0),
        events: touch_storm(&config),
    }
}

#[test]
fn same_seed_same_trace() {
    let a = replay::run(storm_script(9, snap_variant())).unwrap();
    let b = replay::run(storm_script(9, snap_variant())).unwrap();
    assert_eq!(a.to_jsonl().unwrap(), b.to_jsonl().unwrap());
}

#[test]
fn scripted_drag_then_close() {
    let events = DragScript::new()
        .drag(100.0, 120.0, 4)
        .close_requested(true)
        .close_requested(true)
        .transition_end()
        .transition_end()
        .into_events();
    let outcome = replay::run(ReplayScript {
        events,
        ..ReplayScript::default()
    })
    .unwrap();
    assert_eq!(outcome.summary.final_state, SheetState::Closed);
    assert_eq!(outcome.summary.on_close_calls, 1);
    assert_eq!(outcome.summary.lock_freezes, 1);
    assert_eq!(outcome.summary.lock_releases, 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn snap_storm_stays_in_range(seed in any::<u64>()) {
        let outcome = replay::run(storm_script(seed, snap_variant())).unwrap();
        for record in &outcome.records {
            let t = record.presentation.translate;
            prop_assert!(t >= 0.0, "translate {t} below zero at step {}", record.index);
            prop_assert!(t <= 800.0, "translate {t} above viewport at step {}", record.index);
        }
        prop_assert!(outcome.summary.on_close_calls <= 1);
        prop_assert_eq!(outcome.summary.lock_freezes, 1);
        prop_assert_eq!(outcome.summary.lock_releases, 1);
    }

    #[test]
    fn closed_is_terminal(seed in any::<u64>()) {
        let mut script = storm_script(seed, VariantScript::Default);
        script.events.push(sheetkit_core::event::SheetEvent::BackdropClick);
        script.events.push(sheetkit_core::event::SheetEvent::CloseTransitionEnd);
        script.events.extend(touch_storm(&StormConfig { seed: seed ^ 1, gestures: 5, ..StormConfig::default() }));
        let outcome = replay::run(script).unwrap();
        let first_closed = outcome
            .records
            .iter()
            .position(|r| r.presentation.state == SheetState::Closed);
        prop_assert!(first_closed.is_some());
        if let Some(i) = first_closed {
            prop_assert!(outcome.records[i..].iter().all(|r| r.presentation.state == SheetState::Closed));
        }
        prop_assert_eq!(outcome.summary.on_close_calls, 1);
    }
}

#![forbid(unsafe_code)]

//! Benchmark: snap-point recomputation and resolution.
//!
//! Run with: `cargo bench -p sheetkit-widgets --bench snap_bench`
//!
//! Recomputation runs on every viewport change (keyboard show/hide fires a
//! burst of them) and resolution on every touch end.

use criterion::{Criterion, criterion_group, criterion_main};
use sheetkit_core::event::{SheetEvent, ViewportSample};
use sheetkit_core::scroll_lock::NoopScrollLock;
use sheetkit_widgets::{BottomSheet, NullHost, SheetConfig, SheetVariant, SnapPointSet, SnapSpec};
use std::hint::black_box;

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet/snap/compute");
    for count in [3usize, 16, 128] {
        let fractions: Vec<f64> = (1..=count).map(|i| i as f64 / count as f64).collect();
        let spec = SnapSpec::fractions(fractions, 0.5);
        group.bench_function(format!("points_{count}"), |b| {
            b.iter(|| black_box(SnapPointSet::compute(black_box(812.0), &spec)));
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet/snap/resolve");
    let set = SnapPointSet::from_points((1..=16).map(|i| i as f64 * 50.0));
    group.bench_function("points_16", |b| {
        b.iter(|| black_box(set.resolve_closest(black_box(437.0))));
    });
    group.finish();
}

fn bench_drag_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet/drag_cycle");
    group.bench_function("start_move_32_end", |b| {
        b.iter(|| {
            let mut sheet = BottomSheet::mount(
                SheetConfig::default(),
                SheetVariant::Snap(SnapSpec::fractions(vec![0.25, 0.5, 0.9], 0.5)),
                ViewportSample::visual(812.0),
                NoopScrollLock,
                || {},
            )
            .expect("mount");
            let mut host = NullHost;
            sheet.handle_event(&SheetEvent::TouchStart { y: 400.0 }, &mut host);
            for i in 0..32 {
                let y = 400.0 + f64::from(i) * 7.0;
                black_box(sheet.handle_event(&SheetEvent::TouchMove { y }, &mut host));
            }
            black_box(sheet.handle_event(&SheetEvent::TouchEnd, &mut host));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_compute, bench_resolve, bench_drag_cycle);
criterion_main!(benches);

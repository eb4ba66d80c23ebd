// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use adaptive_menu_dom::{ElementSpec, Length, Page};
use adaptive_menu_position::{Placement, PositionRequest, compute};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement_compute");
    let anchor = Rect::new(100.0, 50.0, 300.0, 90.0);
    let target = Size::new(40.0, 20.0);
    group.throughput(Throughput::Elements(Placement::ALL.len() as u64));
    group.bench_function("all_placements", |b| {
        b.iter(|| {
            for placement in Placement::ALL {
                black_box(compute(
                    black_box(placement),
                    black_box(anchor),
                    target,
                    8.0,
                    4.0,
                ));
            }
        })
    });
    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement_apply");
    let mut page = Page::new(Size::new(800.0, 600.0));
    let base = page.insert(
        None,
        ElementSpec::named("base")
            .at(200.0, 200.0)
            .width(Length::Px(120.0))
            .height(Length::Px(40.0)),
    );
    let target = page.insert(None, ElementSpec::named("target").width(Length::Px(80.0)));
    group.bench_function("apply_bottom_center", |b| {
        b.iter(|| {
            black_box(
                PositionRequest::bottom_center(base, target)
                    .distance(10.0)
                    .apply(&mut page),
            )
        })
    });
    group.bench_function("apply_or_log_rejected", |b| {
        b.iter(|| {
            black_box(
                PositionRequest::bottom(base, target)
                    .distance(f64::NAN)
                    .apply_or_log(&mut page),
            )
        })
    });
    group.finish();
}

criterion_group!(benches, bench_compute, bench_apply);
criterion_main!(benches);

// Copyright 2025 the Adaptive Menu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use adaptive_menu::{MenuConfig, MenuSession, standard_page};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("shrink_simulation");
    for count in ["3", "5", "8"] {
        group.bench_function(format!("generate_to_collapse_n{count}"), |b| {
            b.iter_batched(
                || {
                    let config = MenuConfig::default();
                    MenuSession::new(standard_page(&config, Some(count)), config)
                },
                |mut session| {
                    session.generate(Duration::ZERO);
                    let ticks = session.advance_to(Duration::from_secs(120));
                    black_box((ticks, session.phase()));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_single_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("shrink_tick");
    group.bench_function("tick_while_shrinking", |b| {
        b.iter_batched(
            || {
                let config = MenuConfig::default();
                let mut session = MenuSession::new(standard_page(&config, Some("5")), config);
                session.generate(Duration::ZERO);
                session
            },
            |mut session| {
                black_box(session.advance_to(Duration::from_millis(40)));
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_full_run, bench_single_tick);
criterion_main!(benches);

// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification queue.
//!
//! Measures the performance of:
//! - Enqueueing a burst into one zone (most of it lands in the pending list)
//! - Ticking a busy manager through a full show/expire/promote cycle

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use snap_toast::ui::notifications::{Manager, Notification, Position};
use std::hint::black_box;
use std::time::{Duration, Instant};

const BURST: usize = 200;

fn burst(manager: &mut Manager, now: Instant) {
    for (index, position) in Position::ALL.iter().cycle().take(BURST).enumerate() {
        manager.enqueue_at(
            Notification::info(format!("toast {index}"))
                .with_position(*position)
                .with_duration(Duration::from_millis(1000)),
            now,
        );
    }
}

/// Benchmark enqueueing a burst of toasts across all zones.
fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");

    group.bench_function("enqueue_burst", |b| {
        b.iter_batched(
            Manager::new,
            |mut manager| {
                burst(&mut manager, Instant::now());
                black_box(manager);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark draining a burst with ticks until every group is torn down.
fn bench_tick_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");

    group.bench_function("tick_until_empty", |b| {
        b.iter_batched(
            || {
                let mut manager = Manager::new();
                let t0 = Instant::now();
                burst(&mut manager, t0);
                (manager, t0)
            },
            |(mut manager, t0)| {
                let mut now = t0;
                while manager.has_notifications() {
                    now += Duration::from_millis(50);
                    black_box(manager.tick(now));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_enqueue, bench_tick_churn);
criterion_main!(benches);

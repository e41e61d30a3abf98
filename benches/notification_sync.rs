// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use notification_center::notifications::{
    Action, ActionMap, NotificationCenter, NotificationOptions,
};
use std::hint::black_box;

fn actions(count: usize) -> ActionMap {
    (0..count)
        .map(|i| (format!("Action {i}"), Action::Fixed(i % 2 == 0)))
        .collect()
}

fn notification_sync_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_sync");

    group.bench_function("add_notification", |b| {
        let mut center = NotificationCenter::new();
        b.iter(|| {
            let id = center
                .add_notification(
                    NotificationOptions::new()
                        .title("Benchmark")
                        .subtitle("subtitle")
                        .actions(actions(3)),
                )
                .id();
            black_box(id);
            center.dismiss(id);
        });
    });

    group.bench_function("update_body", |b| {
        let mut center = NotificationCenter::new();
        let id = center.add_notification(NotificationOptions::new()).id();
        let mut n = 0u64;
        b.iter(|| {
            n += 1;
            if let Some(mut notification) = center.notification_mut(id) {
                notification.set_text(format!("progress {n}"));
            }
        });
    });

    group.bench_function("replace_actions", |b| {
        let mut center = NotificationCenter::new();
        let id = center.add_notification(NotificationOptions::new()).id();
        b.iter_batched(
            || actions(8),
            |map| {
                if let Some(mut notification) = center.notification_mut(id) {
                    notification.set_actions(map);
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, notification_sync_benchmark);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use std::{hint::black_box, time};
use tripwise::prelude::*;

fn build_day(stops: u32) -> Vec<Stop> {
    (0..stops)
        .map(|i| {
            let coordinate = Coordinate::from((
                59.330_000 + f64::from(i % 17) * 0.004,
                18.060_000 + f64::from(i % 13) * 0.006,
            ));
            Stop::new(u64::from(i), 1, i as i32)
                .at(Time::from_seconds(8 * 3600 + i * 20 * 60))
                .staying(Duration::from_minutes(15))
                .located(coordinate)
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            println!("Failed to start tokio runtime: {err}");
            return;
        }
    };
    let oracle = EstimateOracle::new();
    let small = build_day(8);
    let large = build_day(40);

    let mut group = c.benchmark_group("Validation");

    group.warm_up_time(time::Duration::from_secs(3));

    group.measurement_time(time::Duration::from_secs(10));

    group.bench_function("Day with 8 stops", |b| {
        b.to_async(&runtime)
            .iter(|| async { black_box(validate(&small, &oracle).await) })
    });

    group.bench_function("Day with 40 stops", |b| {
        b.to_async(&runtime)
            .iter(|| async { black_box(validate(&large, &oracle).await) })
    });

    group.bench_function("Move last stop up", |b| {
        let id = StopId::from(39);
        b.iter(|| black_box(move_adjacent(&large, &id, Direction::Up)))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

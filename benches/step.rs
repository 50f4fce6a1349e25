//! Benchmarks for show stepping.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use skyburst::prelude::*;

const DT: f64 = 0.016;

/// A show pre-stepped so the population is realistic for the given age.
fn warmed_show(steps: usize) -> FireworkShow {
    let mut show = FireworkShow::new(1280, 720, ShowConfig::new().with_seed(1));
    for _ in 0..steps {
        show.update(DT);
    }
    show
}

fn bench_show_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("show_update");

    // 60: rockets only. 600: first explosions. 900: heavy spark load.
    for &age in &[60usize, 600, 900] {
        group.bench_with_input(BenchmarkId::new("step", age), &age, |b, &age| {
            b.iter_batched(
                || warmed_show(age),
                |mut show| {
                    show.update(black_box(DT));
                    show
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_firework_update(c: &mut Criterion) {
    let config = ShowConfig::new();

    c.bench_function("firework_update_exploded", |b| {
        let mut spawn = SpawnContext::from_seed(2);
        let mut firework = Firework::new(DVec2::new(640.0, 700.0), &mut spawn);
        while !firework.exploded() {
            firework.update(DT, &config, &mut spawn);
        }

        b.iter(|| {
            firework.update(black_box(0.0), &config, &mut spawn);
        })
    });
}

criterion_group!(benches, bench_show_update, bench_firework_update);
criterion_main!(benches);

//! Criterion benchmarks for triangle construction and derived quantities.
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use trigon::rand::{draw_triangle, ReplayToken, SampleCfg};
use trigon::{Catalog, Locale, Report, Triangle};

fn sample_sides(n: u64) -> Vec<[f64; 3]> {
    (0..n)
        .map(|i| {
            draw_triangle(SampleCfg::default(), ReplayToken::new(11, i))
                .expect("default sampler params are valid")
                .sides()
        })
        .collect()
}

fn bench_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangle");
    let sides = sample_sides(256);

    group.bench_function("from_sides", |b| {
        b.iter(|| {
            for &[x, y, z] in &sides {
                let _t = black_box(Triangle::from_sides(x, y, z));
            }
        })
    });

    group.bench_function("set_sides", |b| {
        b.iter_batched(
            || Triangle::from_sides(1.0, 1.0, 1.0).expect("unit triangle"),
            |mut t| {
                for s in &sides {
                    let _ = t.set_sides(*s);
                }
                t
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("area", |b| {
        let t = Triangle::from_legs(3.0, 4.0).expect("3-4-5");
        b.iter(|| black_box(t).area())
    });

    group.bench_function("render_report", |b| {
        let t = Triangle::from_sides(3.0, 4.0, 5.0).expect("3-4-5");
        let labels = Catalog::builtin(Locale::Sv);
        b.iter(|| Report::new(black_box(&t)).render(&labels))
    });
    group.finish();
}

criterion_group!(benches, bench_triangle);
criterion_main!(benches);

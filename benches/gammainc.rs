use criterion::{black_box, criterion_group, criterion_main, Criterion};

use incgamma::{gammainc, Buffer, Input, Operand, Options, Tail};

// ---------------------------------------------------------------------------
// Scalar core: one point per convergence regime
// ---------------------------------------------------------------------------

fn scalar_series_region(c: &mut Criterion) {
    // x < s: the power series evaluates the lower tail directly
    c.bench_function("scalar_series_region", |b| {
        b.iter(|| incgamma::gamma_inc(black_box(10.0_f64), black_box(2.0), Tail::Lower, true))
    });
}

fn scalar_continued_fraction_region(c: &mut Criterion) {
    // x > s: the Lentz continued fraction evaluates the upper tail directly
    c.bench_function("scalar_cf_region", |b| {
        b.iter(|| incgamma::gamma_inc(black_box(2.0_f64), black_box(10.0), Tail::Lower, true))
    });
}

fn scalar_near_crossover(c: &mut Criterion) {
    c.bench_function("scalar_near_crossover", |b| {
        b.iter(|| incgamma::gamma_inc(black_box(5.0_f64), black_box(5.0), Tail::Upper, true))
    });
}

// ---------------------------------------------------------------------------
// Bulk dispatch over a typed buffer
// ---------------------------------------------------------------------------

fn bulk_buffer_1k(c: &mut Criterion) {
    let xs: Vec<f64> = (0..1024).map(|i| 0.01 + i as f64 * 0.02).collect();
    c.bench_function("bulk_buffer_1k", |b| {
        b.iter(|| {
            gammainc(
                Input::Buffer(Buffer::from(black_box(xs.clone()))),
                Operand::Scalar(2.5),
                &Options::default(),
            )
            .unwrap()
        })
    });
}

criterion_group!(
    benches,
    scalar_series_region,
    scalar_continued_fraction_region,
    scalar_near_crossover,
    bulk_buffer_1k
);
criterion_main!(benches);

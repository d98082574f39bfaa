use criterion::{black_box, criterion_group, criterion_main, Criterion, SamplingMode};
use std::f64::consts::PI;
use std::time::Duration;

use fourier_plotter::evaluator::{evaluate_fourier, evaluate_regular};
use fourier_plotter::signal::{FourierParams, SinusoidParams, TimeGrid};

fn benchmark_functions(c: &mut Criterion) {
    let grid = TimeGrid::over_span(2.0 * PI);
    let sinusoids = [SinusoidParams {
        amplitude: 1.0,
        frequency: 1.0,
        phase: 1.0,
    }; 3];
    let fourier = FourierParams {
        dc: 1.0,
        omega: 1.0,
        period: 2.0 * PI,
        cosine_coeffs: [0.5; 9],
        sine_coeffs: [0.5; 9],
    };

    let mut group = c.benchmark_group("flat-sampling");
    group.sampling_mode(SamplingMode::Flat);

    group.bench_function("evaluate_regular", |b| {
        b.iter(|| evaluate_regular(black_box(&sinusoids), black_box(&grid)))
    });

    group.bench_function("evaluate_fourier", |b| {
        b.iter(|| evaluate_fourier(black_box(&fourier), black_box(&grid)))
    });
}

fn custom_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(10))
        .configure_from_args()
}

criterion_group! {
    name = benches;
    config = custom_criterion();
    targets = benchmark_functions
}
criterion_main!(benches);

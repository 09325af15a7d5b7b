//! Criterion benchmarks for the Fibonacci evaluators.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fibeval_core::blenkinsop::Blenkinsop;
use fibeval_core::calculator::CoreCalculator;
use fibeval_core::fastdoubling::FastDoubling;
use fibeval_core::series::LinearSeries;
use fibeval_core::takahashi::Takahashi;
use fibeval_core::Dispatcher;

fn bench_evaluators(c: &mut Criterion) {
    let evaluators: Vec<Box<dyn CoreCalculator>> = vec![
        Box::new(LinearSeries::new()),
        Box::new(Blenkinsop::new()),
        Box::new(Takahashi::new()),
        Box::new(FastDoubling::new()),
    ];

    // Straddles both default crossovers
    let ns: Vec<u64> = vec![100, 1_000, 5_504, 10_000, 100_000];

    for evaluator in &evaluators {
        let mut group = c.benchmark_group(evaluator.name());
        for &n in &ns {
            if evaluator.name() == "Series" && n > 10_000 {
                continue;
            }
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
                b.iter(|| evaluator.calculate_core(n));
            });
        }
        group.finish();
    }
}

fn bench_dispatcher(c: &mut Criterion) {
    let dispatcher = Dispatcher::default();
    let mut group = c.benchmark_group("Adaptive");
    for n in [50i64, 100, 1_000, 10_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| dispatcher.compute(n));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluators, bench_dispatcher);
criterion_main!(benches);

//! Timing runs of a single evaluator at a single index.

use std::hint::black_box;
use std::time::{Duration, Instant};

use fibeval_core::calculator::CoreCalculator;

/// Iteration counts for one timing run.
#[derive(Debug, Clone, Copy)]
pub struct BenchConfig {
    pub warmup: u32,
    pub iterations: u32,
}

impl BenchConfig {
    /// Thorough settings used by full calibration.
    pub const FULL: Self = Self {
        warmup: 3,
        iterations: 15,
    };

    /// Quick settings used by auto calibration.
    pub const QUICK: Self = Self {
        warmup: 1,
        iterations: 5,
    };
}

/// Timing statistics of one evaluator at one index.
#[derive(Debug, Clone)]
pub struct EvaluatorTiming {
    pub evaluator: String,
    pub n: u64,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub samples: u32,
}

impl EvaluatorTiming {
    /// `Name_n`, e.g. `Blenkinsop_4096`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}_{}", self.evaluator, self.n)
    }

    /// Median in whole nanoseconds, saturating.
    #[must_use]
    pub fn median_ns(&self) -> u64 {
        u64::try_from(self.median.as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Time `evaluator` computing F(n). At least one sample is always taken.
#[must_use]
pub fn time_evaluator(evaluator: &dyn CoreCalculator, n: u64, cfg: BenchConfig) -> EvaluatorTiming {
    for _ in 0..cfg.warmup {
        black_box(evaluator.calculate_core(black_box(n)));
    }

    let samples = cfg.iterations.max(1);
    let mut times: Vec<Duration> = (0..samples)
        .map(|_| {
            let start = Instant::now();
            black_box(evaluator.calculate_core(black_box(n)));
            start.elapsed()
        })
        .collect();
    times.sort_unstable();

    let timing = EvaluatorTiming {
        evaluator: evaluator.name().to_string(),
        n,
        median: median_of_sorted(&times),
        min: times[0],
        max: times[times.len() - 1],
        samples,
    };
    tracing::trace!(label = %timing.label(), median_ns = timing.median_ns(), "timed evaluator");
    timing
}

fn median_of_sorted(times: &[Duration]) -> Duration {
    let mid = times.len() / 2;
    if times.len() % 2 == 1 {
        times[mid]
    } else {
        (times[mid - 1] + times[mid]) / 2
    }
}

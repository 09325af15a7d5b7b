//! Adaptive threshold estimation.
//!
//! Samples a coarse grid of indices, then narrows the bracket around the
//! first sample where the higher-range evaluator wins.

use fibeval_core::blenkinsop::Blenkinsop;
use fibeval_core::calculator::CoreCalculator;
use fibeval_core::options::Options;
use fibeval_core::series::LinearSeries;
use fibeval_core::takahashi::Takahashi;
use fibeval_core::{DEFAULT_BLENKINSOP_LIMIT, DEFAULT_SERIES_LIMIT, MAX_TABLE_INDEX};

use crate::microbench;
use crate::runner::BenchConfig;

/// Coarse samples for the series/Blenkinsop crossover.
pub const SERIES_SAMPLES: [u64; 8] = [96, 128, 192, 256, 384, 512, 768, 1024];

/// Coarse samples for the Blenkinsop/Takahashi crossover.
pub const BLENKINSOP_SAMPLES: [u64; 6] = [1024, 2048, 4096, 8192, 16_384, 32_768];

const BISECTION_STEPS: u32 = 4;

/// Estimate both crossover thresholds with quick benchmarks.
#[must_use]
pub fn estimate_thresholds() -> Options {
    let series_limit = estimate_crossover(
        &LinearSeries::new(),
        &Blenkinsop::new(),
        &SERIES_SAMPLES,
        DEFAULT_SERIES_LIMIT,
    );
    let blenkinsop_limit = estimate_crossover(
        &Blenkinsop::new(),
        &Takahashi::new(),
        &BLENKINSOP_SAMPLES,
        DEFAULT_BLENKINSOP_LIMIT,
    );

    let opts = ordered(series_limit, blenkinsop_limit);
    tracing::info!(
        series_limit = opts.series_limit,
        blenkinsop_limit = opts.blenkinsop_limit,
        "adaptive estimation finished"
    );
    opts
}

/// Build options from measured limits, keeping them ordered and past the table.
#[must_use]
pub fn ordered(series_limit: u64, blenkinsop_limit: u64) -> Options {
    let series_limit = series_limit.max(MAX_TABLE_INDEX.unsigned_abs());
    Options {
        series_limit,
        blenkinsop_limit: blenkinsop_limit.max(series_limit),
    }
}

fn estimate_crossover(
    low: &dyn CoreCalculator,
    high: &dyn CoreCalculator,
    samples: &[u64],
    default: u64,
) -> u64 {
    let points = microbench::find_crossover(low, high, samples, BenchConfig::QUICK);

    let Some(idx) = points.iter().position(|p| p.high_is_faster) else {
        tracing::warn!(
            low = low.name(),
            high = high.name(),
            default,
            "no crossover in sampled range, keeping default"
        );
        return default;
    };

    if idx == 0 {
        return points[0].n.saturating_sub(1);
    }
    bisect(low, high, points[idx - 1].n, points[idx].n)
}

/// Narrow `[slow, fast]`, where `high` loses at `slow` and wins at `fast`.
fn bisect(low: &dyn CoreCalculator, high: &dyn CoreCalculator, mut slow: u64, mut fast: u64) -> u64 {
    for _ in 0..BISECTION_STEPS {
        if fast - slow < 2 {
            break;
        }
        let mid = slow + (fast - slow) / 2;
        if microbench::compare_at(low, high, mid, BenchConfig::QUICK).high_is_faster {
            fast = mid;
        } else {
            slow = mid;
        }
    }
    slow
}

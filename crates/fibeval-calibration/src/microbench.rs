//! Micro-benchmarks comparing two evaluators at the same index.

use fibeval_core::calculator::CoreCalculator;

use crate::runner::{time_evaluator, BenchConfig};

/// Timing of `low` (the evaluator used below the crossover) against `high`
/// (the one used above it) at one index.
#[derive(Debug, Clone)]
pub struct CrossoverPoint {
    pub n: u64,
    pub low_ns: u64,
    pub high_ns: u64,
    pub high_is_faster: bool,
}

/// Compare two evaluators at a single index.
#[must_use]
pub fn compare_at(
    low: &dyn CoreCalculator,
    high: &dyn CoreCalculator,
    n: u64,
    cfg: BenchConfig,
) -> CrossoverPoint {
    let low_timing = time_evaluator(low, n, cfg);
    let high_timing = time_evaluator(high, n, cfg);
    CrossoverPoint {
        n,
        low_ns: low_timing.median_ns(),
        high_ns: high_timing.median_ns(),
        high_is_faster: high_timing.median < low_timing.median,
    }
}

/// Compare two evaluators at each candidate index.
#[must_use]
pub fn find_crossover(
    low: &dyn CoreCalculator,
    high: &dyn CoreCalculator,
    candidates: &[u64],
    cfg: BenchConfig,
) -> Vec<CrossoverPoint> {
    candidates
        .iter()
        .map(|&n| compare_at(low, high, n, cfg))
        .collect()
}

/// Largest index still assigned to `low`: the candidate just before the
/// first one where `high` wins.
///
/// Returns `None` when `high` never wins on the sampled indices.
#[must_use]
pub fn limit_from_points(points: &[CrossoverPoint]) -> Option<u64> {
    let idx = points.iter().position(|p| p.high_is_faster)?;
    Some(match idx {
        0 => points[0].n.saturating_sub(1),
        _ => points[idx - 1].n,
    })
}

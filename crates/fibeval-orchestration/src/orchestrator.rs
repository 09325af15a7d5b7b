//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use fibeval_core::calculator::{Calculator, FibError};

use crate::interfaces::CalculationResult;

fn run_one(calc: &dyn Calculator, n: i64) -> CalculationResult {
    let start = Instant::now();
    let value = calc.calculate(n);
    let duration = start.elapsed();
    tracing::debug!(algorithm = calc.name(), n, ?duration, "calculation finished");

    CalculationResult {
        algorithm: calc.name().to_string(),
        value,
        duration,
    }
}

/// Execute calculations with all given calculators.
///
/// A single calculator runs on the calling thread; several run in parallel
/// on the rayon pool. Results keep the order of `calculators`.
pub fn execute_calculations(calculators: &[Arc<dyn Calculator>], n: i64) -> Vec<CalculationResult> {
    if let [calc] = calculators {
        return vec![run_one(calc.as_ref(), n)];
    }

    use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

    calculators
        .par_iter()
        .map(|calc| run_one(calc.as_ref(), n))
        .collect()
}

/// Analyze comparison results for mismatches.
///
/// Every value is compared with the first one; the first disagreeing
/// calculator is reported.
pub fn analyze_comparison_results(n: i64, results: &[CalculationResult]) -> Result<(), FibError> {
    let Some((first, rest)) = results.split_first() else {
        return Err(FibError::Calculation("no results".into()));
    };

    if let Some(bad) = rest.iter().find(|r| r.value != first.value) {
        tracing::warn!(
            n,
            reference = %first.algorithm,
            algorithm = %bad.algorithm,
            "cross-validation mismatch"
        );
        return Err(FibError::Mismatch {
            n,
            reference: first.algorithm.clone(),
            algorithm: bad.algorithm.clone(),
        });
    }

    Ok(())
}

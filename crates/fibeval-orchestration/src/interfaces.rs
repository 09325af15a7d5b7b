//! Orchestration interfaces.

use std::time::Duration;

use num_bigint::BigUint;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a calculation result.
    fn present_result(&self, result: &CalculationResult, n: i64, details: bool);

    /// Present a comparison of several results.
    fn present_comparison(&self, results: &[CalculationResult]);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Calculator name.
    pub algorithm: String,
    /// The computed value.
    pub value: BigUint,
    /// Computation duration.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_result() {
        let result = CalculationResult {
            algorithm: "Takahashi".into(),
            value: BigUint::from(55u32),
            duration: Duration::from_millis(100),
        };
        assert_eq!(result.algorithm, "Takahashi");
        assert_eq!(result.value, BigUint::from(55u32));
    }
}

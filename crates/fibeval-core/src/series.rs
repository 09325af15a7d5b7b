//! Linear series evaluation.
//!
//! Plain additive recurrence: O(n) additions and no multiplications, which
//! keeps it the cheapest choice just past the end of the lookup table.

use num_bigint::BigUint;
use num_traits::One;

use crate::calculator::CoreCalculator;

/// Evaluate F(n) by summing the series.
#[must_use]
pub fn series(n: u64) -> BigUint {
    let mut a = BigUint::ZERO;
    let mut b = BigUint::one();

    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }

    a
}

/// Linear series evaluator.
pub struct LinearSeries;

impl LinearSeries {
    /// Create a new `LinearSeries` evaluator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinearSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for LinearSeries {
    fn calculate_core(&self, n: u64) -> BigUint {
        series(n)
    }

    fn name(&self) -> &'static str {
        "Series"
    }
}

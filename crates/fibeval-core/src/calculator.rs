//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by orchestration and the CLI.
//! `CoreCalculator` is the internal trait implemented by the evaluators.
//! `FibCalculator` is a decorator that adds index clamping and the table fast path.

use std::sync::Arc;

use num_bigint::BigUint;

use crate::constants::{FIB_TABLE, MAX_TABLE_INDEX};

/// Error type for the layers around the evaluators.
///
/// Evaluation itself cannot fail; these cover configuration and
/// cross-validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// A calculation produced no usable result.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch: {algorithm} disagrees with {reference} for F({n})")]
    Mismatch {
        /// Index that was evaluated.
        n: i64,
        /// Algorithm whose result was taken as reference.
        reference: String,
        /// First algorithm that disagreed.
        algorithm: String,
    },
}

/// Public trait for Fibonacci calculators.
pub trait Calculator: Send + Sync {
    /// Calculate F(n). Negative indices yield 0.
    fn calculate(&self, n: i64) -> BigUint;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for evaluator implementations.
///
/// Implementations accept any `n`, returning 0 for `n == 0`, but are only
/// efficient in their own index range.
pub trait CoreCalculator: Send + Sync {
    /// Evaluate F(n).
    fn calculate_core(&self, n: u64) -> BigUint;

    /// Get the name of this evaluator.
    fn name(&self) -> &str;
}

/// Widen a table entry to a `BigUint`.
///
/// Returns `None` when `n` is outside `0..=MAX_TABLE_INDEX`.
#[must_use]
pub fn table_lookup(n: i64) -> Option<BigUint> {
    let idx = usize::try_from(n).ok().filter(|&i| i < FIB_TABLE.len())?;
    u64::try_from(FIB_TABLE[idx]).ok().map(BigUint::from)
}

/// Decorator that wraps a `CoreCalculator` with clamping and the table fast path.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }
}

impl Calculator for FibCalculator {
    fn calculate(&self, n: i64) -> BigUint {
        let Ok(index) = u64::try_from(n) else {
            return BigUint::ZERO;
        };
        table_lookup(n).unwrap_or_else(|| self.inner.calculate_core(index))
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

//! # fibeval-core
//!
//! Exact Fibonacci numbers as `BigUint`, for any index.
//!
//! Small indices come from a compile-time table. Beyond it the dispatcher
//! picks between a linear series, the Blenkinsop doubling identities and the
//! Takahashi Lucas-sequence method according to measured crossover points.

pub mod bits;
pub mod blenkinsop;
pub mod calculator;
pub mod constants;
pub mod dispatcher;
pub mod fastdoubling;
pub mod options;
pub mod registry;
pub mod series;
pub mod takahashi;

// Re-exports
pub use calculator::{Calculator, CoreCalculator, FibCalculator, FibError};
pub use constants::{
    exit_codes, DEFAULT_BLENKINSOP_LIMIT, DEFAULT_SERIES_LIMIT, FIB_TABLE, MAX_TABLE_INDEX,
    SERIES_CROSSCHECK_LIMIT,
};
pub use dispatcher::{Dispatcher, Region};
pub use options::Options;
pub use registry::{CalculatorFactory, DefaultFactory};

use num_bigint::BigUint;

/// Compute F(n) with the default thresholds.
///
/// Negative indices yield 0.
///
/// # Example
/// ```
/// assert_eq!(fibeval_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibeval_core::fibonacci(0).to_string(), "0");
/// assert_eq!(fibeval_core::fibonacci(-7).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: i64) -> BigUint {
    Dispatcher::default().compute(n)
}

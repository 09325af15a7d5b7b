//! Small-value table and default crossover thresholds.

/// Largest index held in [`FIB_TABLE`].
///
/// F(92) = 7,540,113,804,746,346,429 is the largest Fibonacci number that
/// fits in `i64`. F(93) = 12,200,160,415,121,876,738 overflows `i64::MAX`.
pub const MAX_TABLE_INDEX: i64 = 92;

/// Precomputed Fibonacci values for n = 0..=92.
pub const FIB_TABLE: [i64; 93] = {
    let mut table = [0i64; 93];
    table[1] = 1;
    let mut i = 2;
    while i < 93 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Default upper index (inclusive) for linear series evaluation.
///
/// Measured crossover between the O(n) series and the Blenkinsop doubling
/// identities. Below this the additions are cheaper than the multiplications.
pub const DEFAULT_SERIES_LIMIT: u64 = 100;

/// Default upper index (inclusive) for the Blenkinsop evaluator.
///
/// Above this the Takahashi Lucas-sequence evaluator wins because it spends
/// fewer full-size multiplications per bit.
pub const DEFAULT_BLENKINSOP_LIMIT: u64 = 5504;

/// Largest index at which the `all` selection still includes the linear
/// series. Its cost grows with n², so past this bound it dominates any
/// cross-check run.
pub const SERIES_CROSSCHECK_LIMIT: i64 = 100_000;

/// Process exit codes used by the `fibeval` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

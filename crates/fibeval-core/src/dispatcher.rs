//! Range-based algorithm selection.
//!
//! The dispatcher is the only place that composes the evaluators. It picks
//! one purely from the index, using the crossover thresholds in [`Options`].

use std::fmt;

use num_bigint::BigUint;

use crate::blenkinsop::blenkinsop;
use crate::calculator::{table_lookup, Calculator};
use crate::constants::MAX_TABLE_INDEX;
use crate::options::Options;
use crate::series::series;
use crate::takahashi::takahashi;

/// Strategy the dispatcher uses for a given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// n < 1, clamped to 0.
    Zero,
    /// 1 <= n <= 92, answered from the table.
    Table,
    /// Linear series evaluation.
    Series,
    /// Blenkinsop doubling identities.
    Blenkinsop,
    /// Takahashi Lucas-sequence method.
    Takahashi,
}

impl Region {
    /// Short name of the strategy.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Table => "table",
            Self::Series => "series",
            Self::Blenkinsop => "blenkinsop",
            Self::Takahashi => "takahashi",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adaptive calculator selecting the cheapest evaluator for each index.
///
/// # Example
/// ```
/// use fibeval_core::dispatcher::Dispatcher;
///
/// let dispatcher = Dispatcher::default();
/// assert_eq!(dispatcher.compute(-3).to_string(), "0");
/// assert_eq!(dispatcher.compute(100).to_string(), "354224848179261915075");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    opts: Options,
}

impl Dispatcher {
    /// Create a dispatcher with the given thresholds.
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    /// Thresholds in use.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Strategy that [`compute`](Self::compute) uses for `n`.
    #[must_use]
    pub fn region(&self, n: i64) -> Region {
        match u64::try_from(n) {
            Err(_) | Ok(0) => Region::Zero,
            Ok(_) if n <= MAX_TABLE_INDEX => Region::Table,
            Ok(index) if index <= self.opts.series_limit => Region::Series,
            Ok(index) if index <= self.opts.blenkinsop_limit => Region::Blenkinsop,
            Ok(_) => Region::Takahashi,
        }
    }

    /// Compute F(n). Negative indices yield 0.
    #[must_use]
    pub fn compute(&self, n: i64) -> BigUint {
        let region = self.region(n);
        tracing::trace!(n, %region, "dispatching");

        let index = u64::try_from(n).unwrap_or_default();

        match region {
            Region::Zero => BigUint::ZERO,
            Region::Table => table_lookup(n).unwrap_or_default(),
            Region::Series => series(index),
            Region::Blenkinsop => blenkinsop(index),
            Region::Takahashi => takahashi(index),
        }
    }
}

impl Calculator for Dispatcher {
    fn calculate(&self, n: i64) -> BigUint {
        self.compute(n)
    }

    fn name(&self) -> &'static str {
        "Adaptive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;

    #[test]
    fn non_positive_is_zero() {
        let d = Dispatcher::default();
        for n in [i64::MIN, -100, -1, 0] {
            assert_eq!(d.compute(n), BigUint::ZERO);
            assert_eq!(d.region(n), Region::Zero);
        }
    }

    #[test]
    fn table_range_matches_table() {
        let d = Dispatcher::default();
        for n in 1..=MAX_TABLE_INDEX {
            let entry = FIB_TABLE[usize::try_from(n).unwrap()];
            let expected = BigUint::from(u64::try_from(entry).unwrap());
            assert_eq!(d.compute(n), expected);
        }
        assert_eq!(d.compute(50), BigUint::from(12_586_269_025u64));
    }

    #[test]
    fn default_regions() {
        let d = Dispatcher::default();
        assert_eq!(d.region(i64::MIN), Region::Zero);
        assert_eq!(d.region(0), Region::Zero);
        assert_eq!(d.region(1), Region::Table);
        assert_eq!(d.region(92), Region::Table);
        assert_eq!(d.region(93), Region::Series);
        assert_eq!(d.region(100), Region::Series);
        assert_eq!(d.region(101), Region::Blenkinsop);
        assert_eq!(d.region(5504), Region::Blenkinsop);
        assert_eq!(d.region(5505), Region::Takahashi);
        assert_eq!(d.region(i64::MAX), Region::Takahashi);
    }

    #[test]
    fn custom_thresholds_move_regions() {
        let d = Dispatcher::new(Options {
            series_limit: 1000,
            blenkinsop_limit: 2000,
        });
        assert_eq!(d.region(500), Region::Series);
        assert_eq!(d.region(1500), Region::Blenkinsop);
        assert_eq!(d.region(2001), Region::Takahashi);
        assert_eq!(d.compute(2001), takahashi(2001));
    }

    #[test]
    fn series_limit_below_table_skips_series() {
        let d = Dispatcher::new(Options {
            series_limit: 10,
            blenkinsop_limit: 200,
        });
        assert_eq!(d.region(50), Region::Table);
        assert_eq!(d.region(93), Region::Blenkinsop);
    }

    #[test]
    fn region_display() {
        assert_eq!(Region::Takahashi.to_string(), "takahashi");
        assert_eq!(Region::Table.as_str(), "table");
    }

    #[test]
    fn calculator_name() {
        assert_eq!(Dispatcher::default().name(), "Adaptive");
    }
}

//! Dispatcher tuning options.

use serde::{Deserialize, Serialize};

use crate::calculator::FibError;
use crate::constants::{DEFAULT_BLENKINSOP_LIMIT, DEFAULT_SERIES_LIMIT};

/// Crossover thresholds used by the dispatcher.
///
/// Indices up to `series_limit` use the linear series, up to
/// `blenkinsop_limit` the Blenkinsop identities, and everything above the
/// Takahashi method. The table still answers every index it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Largest index (inclusive) evaluated by the linear series.
    pub series_limit: u64,
    /// Largest index (inclusive) evaluated by the Blenkinsop method.
    pub blenkinsop_limit: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            series_limit: DEFAULT_SERIES_LIMIT,
            blenkinsop_limit: DEFAULT_BLENKINSOP_LIMIT,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.series_limit == 0 {
            self.series_limit = DEFAULT_SERIES_LIMIT;
        }
        if self.blenkinsop_limit == 0 {
            self.blenkinsop_limit = DEFAULT_BLENKINSOP_LIMIT;
        }
        self
    }

    /// Check that the thresholds partition the index range in order.
    pub fn validate(&self) -> Result<(), FibError> {
        if self.series_limit > self.blenkinsop_limit {
            return Err(FibError::Config(format!(
                "series limit {} exceeds Blenkinsop limit {}",
                self.series_limit, self.blenkinsop_limit
            )));
        }
        Ok(())
    }
}

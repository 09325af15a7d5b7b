//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::blenkinsop::Blenkinsop;
use crate::calculator::{Calculator, FibCalculator, FibError};
use crate::dispatcher::Dispatcher;
use crate::fastdoubling::FastDoubling;
use crate::options::Options;
use crate::series::LinearSeries;
use crate::takahashi::Takahashi;

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    opts: Options,
    cache: RwLock<HashMap<String, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a factory whose adaptive calculator uses default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create a factory whose adaptive calculator uses `opts`.
    #[must_use]
    pub fn with_options(opts: Options) -> Self {
        Self {
            opts,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_calculator(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        match name {
            "adaptive" | "auto" => Ok(Arc::new(Dispatcher::new(self.opts))),
            "series" => Ok(Arc::new(FibCalculator::new(Arc::new(LinearSeries::new())))),
            "blenkinsop" => Ok(Arc::new(FibCalculator::new(Arc::new(Blenkinsop::new())))),
            "takahashi" => Ok(Arc::new(FibCalculator::new(Arc::new(Takahashi::new())))),
            "fast" | "fastdoubling" => {
                Ok(Arc::new(FibCalculator::new(Arc::new(FastDoubling::new()))))
            }
            _ => Err(FibError::Config(format!("unknown calculator: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        if let Some(calc) = self.cache.read().get(name) {
            return Ok(Arc::clone(calc));
        }

        let calc = self.create_calculator(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        vec!["adaptive", "series", "blenkinsop", "takahashi", "fast"]
    }
}

//! Calibration engine.

use fibeval_core::blenkinsop::Blenkinsop;
use fibeval_core::series::LinearSeries;
use fibeval_core::takahashi::Takahashi;
use fibeval_core::{DEFAULT_BLENKINSOP_LIMIT, DEFAULT_SERIES_LIMIT};

use crate::adaptive;
use crate::microbench;
use crate::runner::BenchConfig;
use crate::profile::CalibrationProfile;

/// Mode of calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationMode {
    /// Full calibration: dense scan of both crossover ranges.
    Full,
    /// Auto calibration: coarse samples plus bisection.
    Auto,
    /// Cached: load from profile file.
    Cached,
}

/// Progress callback for calibration.
pub type ProgressCallback = Box<dyn Fn(CalibrationProgress) + Send>;

/// Progress information during calibration.
#[derive(Debug, Clone)]
pub struct CalibrationProgress {
    /// Current step name.
    pub step: String,
    /// Current step number (1-based).
    pub current: usize,
    /// Total number of steps.
    pub total: usize,
}

/// Calibration engine that determines the dispatcher crossovers.
pub struct CalibrationEngine {
    mode: CalibrationMode,
    progress_cb: Option<ProgressCallback>,
}

impl CalibrationEngine {
    /// Create a new calibration engine.
    #[must_use]
    pub fn new(mode: CalibrationMode) -> Self {
        Self {
            mode,
            progress_cb: None,
        }
    }

    /// Set a progress callback.
    #[must_use]
    pub fn with_progress(mut self, cb: ProgressCallback) -> Self {
        self.progress_cb = Some(cb);
        self
    }

    /// Run calibration and produce a profile.
    #[must_use]
    pub fn calibrate(&self) -> CalibrationProfile {
        tracing::info!(mode = ?self.mode, "starting calibration");
        match self.mode {
            CalibrationMode::Full => self.full_calibration(),
            CalibrationMode::Auto => self.auto_calibration(),
            CalibrationMode::Cached => self.load_cached(),
        }
    }

    fn report_progress(&self, step: &str, current: usize, total: usize) {
        tracing::debug!(step, current, total, "calibration progress");
        if let Some(cb) = &self.progress_cb {
            cb(CalibrationProgress {
                step: step.to_string(),
                current,
                total,
            });
        }
    }

    fn full_calibration(&self) -> CalibrationProfile {
        let total_steps = 3;

        self.report_progress("Scanning series/Blenkinsop crossover", 1, total_steps);
        let series_grid: Vec<u64> = (96..=1024).step_by(32).collect();
        let points = microbench::find_crossover(
            &LinearSeries::new(),
            &Blenkinsop::new(),
            &series_grid,
            BenchConfig::FULL,
        );
        let series_limit = microbench::limit_from_points(&points).unwrap_or(DEFAULT_SERIES_LIMIT);

        self.report_progress("Scanning Blenkinsop/Takahashi crossover", 2, total_steps);
        let blenkinsop_grid: Vec<u64> = (1024..=32_768).step_by(1024).collect();
        let points = microbench::find_crossover(
            &Blenkinsop::new(),
            &Takahashi::new(),
            &blenkinsop_grid,
            BenchConfig::FULL,
        );
        let blenkinsop_limit =
            microbench::limit_from_points(&points).unwrap_or(DEFAULT_BLENKINSOP_LIMIT);

        self.report_progress("Building profile", 3, total_steps);
        CalibrationProfile::for_host(adaptive::ordered(series_limit, blenkinsop_limit))
    }

    fn auto_calibration(&self) -> CalibrationProfile {
        let total_steps = 2;

        self.report_progress("Running adaptive estimation", 1, total_steps);
        let opts = adaptive::estimate_thresholds();

        self.report_progress("Building profile", 2, total_steps);
        CalibrationProfile::for_host(opts)
    }

    fn load_cached(&self) -> CalibrationProfile {
        crate::io::load_validated_profile().unwrap_or_else(|| {
            tracing::warn!("no usable cached profile, using defaults");
            CalibrationProfile::default()
        })
    }
}

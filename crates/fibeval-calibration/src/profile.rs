//! Calibration profile (serializable).

use serde::{Deserialize, Serialize};

use fibeval_core::options::Options;
use fibeval_core::{DEFAULT_BLENKINSOP_LIMIT, DEFAULT_SERIES_LIMIT};

/// Current profile format version.
pub const PROFILE_VERSION: u32 = 1;

/// Calibration profile containing measured crossover thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationProfile {
    /// Profile format version for compatibility checking.
    pub version: u32,
    /// Measured series/Blenkinsop crossover.
    pub series_limit: u64,
    /// Measured Blenkinsop/Takahashi crossover.
    pub blenkinsop_limit: u64,
    /// CPU model used for calibration.
    pub cpu_model: String,
    /// Number of CPU cores.
    pub num_cores: usize,
    /// CPU fingerprint for invalidation.
    pub cpu_fingerprint: String,
    /// Calibration timestamp.
    pub timestamp: String,
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            series_limit: DEFAULT_SERIES_LIMIT,
            blenkinsop_limit: DEFAULT_BLENKINSOP_LIMIT,
            cpu_model: String::new(),
            num_cores: num_cpus(),
            cpu_fingerprint: String::new(),
            timestamp: String::new(),
        }
    }
}

impl CalibrationProfile {
    /// Build a profile for this host from measured thresholds.
    #[must_use]
    pub fn for_host(opts: Options) -> Self {
        Self {
            version: PROFILE_VERSION,
            series_limit: opts.series_limit,
            blenkinsop_limit: opts.blenkinsop_limit,
            cpu_model: cpu_model(),
            num_cores: num_cpus(),
            cpu_fingerprint: cpu_fingerprint(),
            timestamp: current_timestamp(),
        }
    }

    /// Dispatcher options carried by this profile.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            series_limit: self.series_limit,
            blenkinsop_limit: self.blenkinsop_limit,
        }
    }

    /// Check if this profile is compatible with the current version.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.version == PROFILE_VERSION
    }

    /// Check if this profile matches the current CPU.
    #[must_use]
    pub fn matches_cpu(&self, current_fingerprint: &str) -> bool {
        if self.cpu_fingerprint.is_empty() || current_fingerprint.is_empty() {
            return true; // can't verify, assume compatible
        }
        self.cpu_fingerprint == current_fingerprint
    }

    /// Validate that thresholds are non-zero and ordered.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.series_limit > 0 && self.blenkinsop_limit > 0 && self.options().validate().is_ok()
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(4)
}

/// Get a CPU fingerprint based on model and core count.
#[must_use]
pub fn cpu_fingerprint() -> String {
    let model = cpu_model();
    let cores = num_cpus();
    if model.is_empty() {
        format!("cores={cores}")
    } else {
        format!("{model};cores={cores}")
    }
}

/// Get the current CPU model string.
#[must_use]
pub fn cpu_model() -> String {
    use sysinfo::System;
    let sys = System::new_all();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .unwrap_or_default()
}

/// Get the current timestamp as seconds since the Unix epoch.
#[must_use]
pub fn current_timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("unix:{}", dur.as_secs())
}

//! # fibeval-calibration
//!
//! Re-measures the dispatcher crossover points on the host and persists
//! them as a calibration profile.

pub mod adaptive;
pub mod calibration;
pub mod io;
pub mod microbench;
pub mod profile;
pub mod runner;

pub use calibration::{CalibrationEngine, CalibrationMode};
pub use profile::CalibrationProfile;

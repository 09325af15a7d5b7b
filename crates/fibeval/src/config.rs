//! Application configuration from CLI flags and environment.

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use fibeval_core::options::Options;

/// fibeval: exact Fibonacci numbers with an adaptive evaluator.
#[derive(Parser, Debug)]
#[command(name = "fibeval", version, about)]
pub struct AppConfig {
    /// Fibonacci index to evaluate (negative indices yield 0).
    #[arg(
        short,
        long,
        default_value_t = 1000,
        env = "FIBEVAL_N",
        allow_negative_numbers = true
    )]
    pub n: i64,

    /// Calculator to use: adaptive, series, blenkinsop, takahashi, fast, or all.
    /// `all` leaves out the linear series above index 100,000.
    #[arg(long, default_value = "adaptive")]
    pub algo: String,

    /// Verbose output (print the full value).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show region, bit length and digit count.
    #[arg(short, long)]
    pub details: bool,

    /// Write the decimal value to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Largest index evaluated by the linear series (0 = profile or default).
    #[arg(long, default_value_t = 0)]
    pub series_limit: u64,

    /// Largest index evaluated by the Blenkinsop ladder (0 = profile or default).
    #[arg(long, default_value_t = 0)]
    pub blenkinsop_limit: u64,

    /// Run full calibration and save the profile.
    #[arg(long, conflicts_with = "auto_calibrate")]
    pub calibrate: bool,

    /// Run quick automatic calibration and save the profile.
    #[arg(long)]
    pub auto_calibrate: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Write a completion script for `shell`.
    pub fn write_completion(shell: Shell, out: &mut dyn io::Write) {
        let mut cmd = <Self as CommandFactory>::command();
        let bin = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, bin, out);
    }

    /// True when both thresholds were given on the command line.
    #[must_use]
    pub fn has_explicit_limits(&self) -> bool {
        self.series_limit != 0 && self.blenkinsop_limit != 0
    }

    /// Dispatcher options: explicit flags win, `fallback` fills the rest.
    ///
    /// `fallback` is only invoked when at least one flag was left at 0.
    pub fn dispatcher_options(&self, fallback: impl FnOnce() -> Options) -> Options {
        if self.has_explicit_limits() {
            return Options {
                series_limit: self.series_limit,
                blenkinsop_limit: self.blenkinsop_limit,
            };
        }
        let base = fallback();
        Options {
            series_limit: pick(self.series_limit, base.series_limit),
            blenkinsop_limit: pick(self.blenkinsop_limit, base.blenkinsop_limit),
        }
        .normalize()
    }
}

/// Log filter from `RUST_LOG`-style directives, WARN when none are given.
///
/// Directives replace the default rather than being capped by it, so
/// `RUST_LOG=debug` enables the orchestrator and profile-loading logs.
#[must_use]
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

fn pick(flag: u64, base: u64) -> u64 {
    if flag == 0 {
        base
    } else {
        flag
    }
}

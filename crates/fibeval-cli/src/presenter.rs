//! CLI result presenter.

use std::io::{self, Write};

use fibeval_core::Dispatcher;
use fibeval_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_duration, format_index, format_number, format_result};
use crate::ui::Palette;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    dispatcher: Dispatcher,
    palette: Palette,
}

impl CLIResultPresenter {
    /// `dispatcher` is only consulted to name the region in detailed output.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, dispatcher: Dispatcher) -> Self {
        Self {
            verbose,
            quiet,
            dispatcher,
            palette: Palette::from_env(),
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Write one result in the configured mode.
    pub fn write_result(
        &self,
        out: &mut dyn Write,
        result: &CalculationResult,
        n: i64,
        details: bool,
    ) -> io::Result<()> {
        if self.quiet {
            return writeln!(out, "{}", result.value);
        }

        writeln!(out, "Algorithm: {}", result.algorithm)?;
        writeln!(out, "N: {}", format_index(n))?;
        writeln!(out, "Duration: {}", format_duration(result.duration))?;

        if details {
            writeln!(out, "Region: {}", self.palette.region(self.dispatcher.region(n)))?;
            writeln!(out, "Result bits: {}", format_number(result.value.bits()))?;
            writeln!(
                out,
                "Result digits: {}",
                format_number(result.value.to_string().len() as u64)
            )?;
        }

        writeln!(
            out,
            "F({}) = {}",
            format_index(n),
            format_result(&result.value, self.verbose)
        )
    }

    /// Write the comparison table; every row is checked against the first result.
    pub fn write_comparison(
        &self,
        out: &mut dyn Write,
        results: &[CalculationResult],
    ) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "{}", self.palette.header("Comparison"))?;
        let reference = results.first().map(|r| &r.value);
        for result in results {
            writeln!(
                out,
                "  {:<14} {:>12} [{}]",
                result.algorithm,
                format_duration(result.duration),
                self.palette.status(Some(&result.value) == reference),
            )?;
        }
        Ok(())
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &CalculationResult, n: i64, details: bool) {
        // a closed stdout (e.g. piped into `head`) is not an evaluation failure
        let _ = self.write_result(&mut io::stdout().lock(), result, n, details);
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        let _ = self.write_comparison(&mut io::stdout().lock(), results);
    }
}

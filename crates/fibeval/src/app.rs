//! Application entry point and dispatch.

use anyhow::{Context, Result};

use fibeval_calibration::calibration::{CalibrationEngine, CalibrationMode};
use fibeval_cli::output::write_to_file;
use fibeval_cli::presenter::CLIResultPresenter;
use fibeval_core::dispatcher::Dispatcher;
use fibeval_core::options::Options;
use fibeval_core::registry::DefaultFactory;
use fibeval_orchestration::calculator_selection::get_calculators_to_run;
use fibeval_orchestration::interfaces::ResultPresenter;
use fibeval_orchestration::orchestrator::{analyze_comparison_results, execute_calculations};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        AppConfig::write_completion(shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.calibrate || config.auto_calibrate {
        return run_calibration(config);
    }

    run_cli(config)
}

/// Resolve dispatcher options from flags, then the cached profile, then defaults.
pub fn resolve_options(config: &AppConfig) -> Result<Options> {
    let opts = config.dispatcher_options(|| {
        fibeval_calibration::io::load_validated_profile()
            .map(|p| {
                tracing::debug!(
                    series_limit = p.series_limit,
                    blenkinsop_limit = p.blenkinsop_limit,
                    "using calibration profile"
                );
                p.options()
            })
            .unwrap_or_default()
    });
    opts.validate()?;
    Ok(opts)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = resolve_options(config)?;
    let factory = DefaultFactory::with_options(opts);
    let calculators = get_calculators_to_run(&config.algo, &factory, config.n)?;

    let results = execute_calculations(&calculators, config.n);

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, Dispatcher::new(opts));
    for result in &results {
        presenter.present_result(result, config.n, config.details);
    }
    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    analyze_comparison_results(config.n, &results)?;

    if let (Some(path), Some(result)) = (&config.output, results.first()) {
        write_to_file(path, &result.value)
            .with_context(|| format!("writing result to {}", path.display()))?;
        if !config.quiet {
            fibeval_cli::ui::print_success(&format!("Result written to {}", path.display()));
        }
    }

    Ok(())
}

fn run_calibration(config: &AppConfig) -> Result<()> {
    let mode = if config.calibrate {
        CalibrationMode::Full
    } else {
        CalibrationMode::Auto
    };

    let quiet = config.quiet;
    let engine = CalibrationEngine::new(mode).with_progress(Box::new(move |progress| {
        if !quiet {
            eprintln!("[{}/{}] {}", progress.current, progress.total, progress.step);
        }
    }));
    let profile = engine.calibrate();

    if !config.quiet {
        println!("Calibration complete:");
        println!("  Series limit: {}", profile.series_limit);
        println!("  Blenkinsop limit: {}", profile.blenkinsop_limit);
    }

    let path = fibeval_calibration::io::save_profile(&profile)
        .context("saving calibration profile")?;
    if !config.quiet {
        println!("  Saved to {}", path.display());
    }
    Ok(())
}

//! fibeval: exact Fibonacci evaluation from the command line.

use std::process::ExitCode;

use fibeval_lib::{app, config, errors};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(config::log_filter(
            std::env::var("RUST_LOG").ok().as_deref(),
        ))
        .init();

    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            fibeval_cli::ui::print_error(&format!("{e:#}"));
            ExitCode::from(u8::try_from(errors::exit_code(&e)).unwrap_or(1))
        }
    }
}

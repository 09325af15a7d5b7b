//! Error handling and exit codes.

use fibeval_core::calculator::FibError;
use fibeval_core::constants::exit_codes;

/// Exit code for a calculation error.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::Calculation(_) => exit_codes::ERROR_GENERIC,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
        FibError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FibError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

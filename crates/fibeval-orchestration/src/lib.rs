//! # fibeval-orchestration
//!
//! Parallel execution, calculator selection, and result cross-validation.

pub mod calculator_selection;
pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{CalculationResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_calculations};

//! # fibeval-cli
//!
//! CLI output formatting, styling and result presentation.

pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CLIResultPresenter;

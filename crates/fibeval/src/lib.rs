//! fibeval library: application logic for the Fibonacci evaluator binary.

pub mod app;
pub mod config;
pub mod errors;

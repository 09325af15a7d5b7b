//! Golden file integration tests.
//!
//! Checks every evaluator and the adaptive dispatcher against known values
//! from tests/testdata/fibonacci_golden.json.

use std::sync::Arc;

use num_bigint::BigUint;
use serde::Deserialize;

use fibeval_core::blenkinsop::Blenkinsop;
use fibeval_core::calculator::{Calculator, CoreCalculator, FibCalculator};
use fibeval_core::fastdoubling::FastDoubling;
use fibeval_core::series::LinearSeries;
use fibeval_core::takahashi::Takahashi;
use fibeval_core::{Dispatcher, Options};
use fibeval_orchestration::orchestrator::{analyze_comparison_results, execute_calculations};

#[derive(Deserialize)]
struct GoldenData {
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: i64,
    fib: Option<String>,
    fib_prefix: Option<String>,
    fib_suffix: Option<String>,
    fib_digits: Option<usize>,
}

impl GoldenEntry {
    fn check(&self, name: &str, value: &BigUint) {
        let s = value.to_string();
        if let Some(expected) = &self.fib {
            assert_eq!(&s, expected, "{name} mismatch at n={}", self.n);
        }
        if let Some(prefix) = &self.fib_prefix {
            assert!(
                s.starts_with(prefix.as_str()),
                "{name} prefix mismatch at n={}: got '{}'",
                self.n,
                &s[..prefix.len().min(s.len())],
            );
        }
        if let Some(suffix) = &self.fib_suffix {
            assert!(s.ends_with(suffix.as_str()), "{name} suffix mismatch at n={}", self.n);
        }
        if let Some(digits) = self.fib_digits {
            assert_eq!(s.len(), digits, "{name} digit count mismatch at n={}", self.n);
        }
    }
}

fn load_golden_data() -> GoldenData {
    let data = std::fs::read_to_string("tests/testdata/fibonacci_golden.json")
        .or_else(|_| std::fs::read_to_string("../../tests/testdata/fibonacci_golden.json"))
        .expect("Failed to read golden file");
    serde_json::from_str(&data).expect("Failed to parse golden file")
}

fn evaluators() -> Vec<(&'static str, Arc<dyn CoreCalculator>)> {
    vec![
        ("Series", Arc::new(LinearSeries::new()) as Arc<dyn CoreCalculator>),
        ("Blenkinsop", Arc::new(Blenkinsop::new()) as Arc<dyn CoreCalculator>),
        ("Takahashi", Arc::new(Takahashi::new()) as Arc<dyn CoreCalculator>),
        ("FastDoubling", Arc::new(FastDoubling::new()) as Arc<dyn CoreCalculator>),
    ]
}

#[test]
fn golden_adaptive() {
    let dispatcher = Dispatcher::default();
    for entry in &load_golden_data().values {
        entry.check("Adaptive", &dispatcher.compute(entry.n));
    }
}

#[test]
fn golden_every_evaluator() {
    for (name, core) in evaluators() {
        let calc = FibCalculator::new(core);
        for entry in &load_golden_data().values {
            // the linear series is too slow past the Blenkinsop crossover
            if name == "Series" && entry.n > 10_000 {
                continue;
            }
            entry.check(name, &calc.calculate(entry.n));
        }
    }
}

#[test]
fn golden_with_shifted_thresholds() {
    let shifted = [
        Options {
            series_limit: 92,
            blenkinsop_limit: 92,
        },
        Options {
            series_limit: 1000,
            blenkinsop_limit: 1000,
        },
        Options {
            series_limit: 150,
            blenkinsop_limit: 20_000,
        },
    ];
    let data = load_golden_data();
    for opts in shifted {
        let dispatcher = Dispatcher::new(opts);
        for entry in &data.values {
            entry.check("Adaptive", &dispatcher.compute(entry.n));
        }
    }
}

#[test]
fn golden_orchestrated_comparison() {
    let calculators: Vec<Arc<dyn Calculator>> = evaluators()
        .into_iter()
        .filter(|(name, _)| *name != "Series")
        .map(|(_, core)| Arc::new(FibCalculator::new(core)) as Arc<dyn Calculator>)
        .collect();

    for entry in &load_golden_data().values {
        let results = execute_calculations(&calculators, entry.n);
        assert_eq!(results.len(), calculators.len());
        analyze_comparison_results(entry.n, &results).unwrap();
        entry.check(&results[0].algorithm, &results[0].value);
    }
}

//! Calculator selection logic.

use std::sync::Arc;

use fibeval_core::calculator::{Calculator, FibError};
use fibeval_core::registry::CalculatorFactory;
use fibeval_core::SERIES_CROSSCHECK_LIMIT;

/// Get calculators to run for index `n` based on algorithm selection.
///
/// `"all"` selects every registered calculator, except the linear series
/// when `n` exceeds [`SERIES_CROSSCHECK_LIMIT`]. Any other value is looked
/// up by name and always honoured.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
    n: i64,
) -> Result<Vec<Arc<dyn Calculator>>, FibError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .filter(|&name| {
                let keep = name != "series" || n <= SERIES_CROSSCHECK_LIMIT;
                if !keep {
                    tracing::info!(n, limit = SERIES_CROSSCHECK_LIMIT, "skipping linear series");
                }
                keep
            })
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibeval_core::registry::DefaultFactory;

    fn names(calcs: &[Arc<dyn Calculator>]) -> Vec<String> {
        calcs.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("all", &factory, 1000).unwrap();
        assert_eq!(calcs.len(), 5);
        assert!(names(&calcs).contains(&"Series".to_string()));
    }

    #[test]
    fn select_all_at_series_bound() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("all", &factory, SERIES_CROSSCHECK_LIMIT).unwrap();
        assert_eq!(calcs.len(), 5);
    }

    #[test]
    fn select_all_large_index_skips_series() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("all", &factory, 10_000_000).unwrap();
        assert_eq!(calcs.len(), 4);
        assert!(!names(&calcs).contains(&"Series".to_string()));
    }

    #[test]
    fn explicit_series_always_selected() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("series", &factory, 10_000_000).unwrap();
        assert_eq!(names(&calcs), ["Series"]);
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("blenkinsop", &factory, 10).unwrap();
        assert_eq!(calcs.len(), 1);
        assert_eq!(calcs[0].name(), "Blenkinsop");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        let result = get_calculators_to_run("unknown", &factory, 10);
        assert!(matches!(result, Err(FibError::Config(_))));
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;

use fibeval_core::{Dispatcher, Options};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let n = i64::from(i16::from_le_bytes([data[0], data[1]])) * 2;
    let a = u64::from(u16::from_le_bytes([data[2], data[3]])) % 4096;
    let b = u64::from(u16::from_le_bytes([data[4], data[5]])) % 16_384;

    let opts = Options {
        series_limit: a.min(b),
        blenkinsop_limit: a.max(b),
    }
    .normalize();
    if opts.validate().is_err() {
        return;
    }

    // Thresholds only pick the evaluator, never the value
    assert_eq!(
        Dispatcher::new(opts).compute(n),
        Dispatcher::default().compute(n),
        "threshold-dependent result at n={n} with {opts:?}"
    );
});

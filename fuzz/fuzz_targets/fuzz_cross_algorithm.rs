#![no_main]

use libfuzzer_sys::fuzz_target;

use fibeval_core::blenkinsop::blenkinsop;
use fibeval_core::fastdoubling::fast_doubling;
use fibeval_core::takahashi::takahashi;
use fibeval_core::fibonacci;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Capped at 20000 so the three doubling ladders stay fast
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 20_000;

    let reference = fast_doubling(n);
    assert_eq!(blenkinsop(n), reference, "Blenkinsop != FastDoubling at n={n}");
    assert_eq!(takahashi(n), reference, "Takahashi != FastDoubling at n={n}");
    assert_eq!(fibonacci(n as i64), reference, "Adaptive != FastDoubling at n={n}");
});

//! Fast Doubling evaluation.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k+1)^2 + F(k)^2
//!
//! Iterates from MSB to LSB over all bits of n carrying (F(k), F(k+1)).
//! Never picked by the dispatcher; it is an independent formulation used to
//! cross-check the other evaluators and as a calibration baseline.

use num_bigint::BigUint;
use num_traits::One;

use crate::calculator::CoreCalculator;

/// Evaluate F(n) with the fast doubling identities.
#[must_use]
pub fn fast_doubling(n: u64) -> BigUint {
    let num_bits = 64 - n.leading_zeros();

    let mut fk = BigUint::ZERO;
    let mut fk1 = BigUint::one();

    for i in (0..num_bits).rev() {
        // t = (fk1 << 1) - fk
        let mut t = &fk1 << 1u32;
        t -= &fk;

        let f2k = &fk * &t;
        let f2k1 = &fk * &fk + &fk1 * &fk1;
        fk = f2k;
        fk1 = f2k1;

        if (n >> i) & 1 == 1 {
            // (F(2k+1), F(2k+2))
            std::mem::swap(&mut fk, &mut fk1);
            fk1 += &fk;
        }
    }

    fk
}

/// Fast Doubling evaluator.
///
/// # Example
/// ```
/// use fibeval_core::fastdoubling::FastDoubling;
/// use fibeval_core::calculator::CoreCalculator;
///
/// let calc = FastDoubling::new();
/// assert_eq!(calc.calculate_core(100).to_string(), "354224848179261915075");
/// ```
pub struct FastDoubling;

impl FastDoubling {
    /// Create a new `FastDoubling` evaluator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for FastDoubling {
    fn calculate_core(&self, n: u64) -> BigUint {
        fast_doubling(n)
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}

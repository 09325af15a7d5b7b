//! Blenkinsop bit-scanning evaluation.
//!
//! Carries the pair (F(k-1), F(k)) while scanning the bits of n from the
//! most significant one down. With F(k+1) = F(k-1) + F(k):
//!   F(2k)   = F(k) * (F(k-1) + F(k+1))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!   F(2k-1) = F(k-1)^2 + F(k)^2
//!
//! A set bit advances k to 2k+1, a clear bit to 2k. Three multiplications
//! per bit, each on operands about half the size of the final result at
//! the last step.

use num_bigint::BigUint;
use num_traits::One;

use crate::bits::highest_bit_position;
use crate::calculator::CoreCalculator;

/// Evaluate F(n) with the Blenkinsop doubling identities.
#[must_use]
pub fn blenkinsop(n: u64) -> BigUint {
    if n == 0 {
        return BigUint::ZERO;
    }

    // k = 1 after consuming the leading bit
    let mut f1 = BigUint::ZERO;
    let mut f2 = BigUint::one();

    for bit in (0..highest_bit_position(n)).rev() {
        let f3 = &f1 + &f2;
        let f2k = (&f1 + &f3) * &f2;

        if (n >> bit) & 1 == 1 {
            f2 = &f2 * &f2 + &f3 * &f3;
            f1 = f2k;
        } else {
            f1 = &f1 * &f1 + &f2 * &f2;
            f2 = f2k;
        }
    }

    f2
}

/// Blenkinsop evaluator.
///
/// # Example
/// ```
/// use fibeval_core::blenkinsop::Blenkinsop;
/// use fibeval_core::calculator::CoreCalculator;
///
/// let calc = Blenkinsop::new();
/// assert_eq!(calc.calculate_core(100).to_string(), "354224848179261915075");
/// ```
pub struct Blenkinsop;

impl Blenkinsop {
    /// Create a new `Blenkinsop` evaluator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Blenkinsop {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for Blenkinsop {
    fn calculate_core(&self, n: u64) -> BigUint {
        blenkinsop(n)
    }

    fn name(&self) -> &'static str {
        "Blenkinsop"
    }
}

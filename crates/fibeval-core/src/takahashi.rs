//! Takahashi Lucas-sequence evaluation.
//!
//! Tracks f = F(k), l = L(k) and sign = (-1)^k while scanning the bits of n
//! below the most significant one. Each doubling uses one full squaring of
//! F(k) and one of F(k+1) = (F(k) + L(k)) / 2:
//!   F(2k) = 2 F(k+1)^2 - 3 F(k)^2 - 2 (-1)^k
//!   L(2k) = 5 F(k)^2 + 2 (-1)^k
//! A set bit then steps to 2k+1 with additions only:
//!   F(2k+1) = (F(2k) + L(2k)) / 2
//!   L(2k+1) = F(2k+1) + 2 F(2k)
//! The lowest bit is folded into a single closing product:
//!   F(2k)   = F(k) L(k)
//!   F(2k+1) = F(k+1) L(k) - (-1)^k
//!
//! All values are kept in `BigUint`; the sign is applied by choosing between
//! addition and subtraction, in an order that never goes below zero.

use num_bigint::{BigUint, Sign};
use num_traits::One;

use crate::bits::highest_bit_position;
use crate::calculator::CoreCalculator;

/// Evaluate F(n) with the Takahashi Lucas-sequence method.
#[must_use]
pub fn takahashi(n: u64) -> BigUint {
    if n == 0 {
        return BigUint::ZERO;
    }
    if n <= 2 {
        return BigUint::one();
    }

    // k = 1: F(1) = L(1) = 1, (-1)^1 = -1
    let mut f = BigUint::one();
    let mut l = BigUint::one();
    let mut sign = Sign::Minus;

    let bits = highest_bit_position(n);
    let mut mask = 1u64 << (bits - 1);

    for _ in 1..bits {
        let fk_sq = &f * &f;
        let fk1 = (&f + &l) >> 1u32;
        let twice_fk1_sq = (&fk1 * &fk1) << 1u32;
        let triple_fk_sq = &fk_sq * 3u32;

        (f, l) = match sign {
            Sign::Minus => (twice_fk1_sq + 2u32 - triple_fk_sq, fk_sq * 5u32 - 2u32),
            _ => (twice_fk1_sq - triple_fk_sq - 2u32, fk_sq * 5u32 + 2u32),
        };
        sign = Sign::Plus;

        if n & mask != 0 {
            let f2k = std::mem::take(&mut f);
            f = (&f2k + &l) >> 1u32;
            l = &f + (f2k << 1u32);
            sign = Sign::Minus;
        }
        mask >>= 1;
    }

    if n & mask == 0 {
        f * l
    } else {
        let fk1 = (f + &l) >> 1u32;
        match sign {
            Sign::Minus => fk1 * l + 1u32,
            _ => fk1 * l - 1u32,
        }
    }
}

/// Takahashi evaluator.
pub struct Takahashi;

impl Takahashi {
    /// Create a new `Takahashi` evaluator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Takahashi {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for Takahashi {
    fn calculate_core(&self, n: u64) -> BigUint {
        takahashi(n)
    }

    fn name(&self) -> &'static str {
        "Takahashi"
    }
}

//! Bit-length helper shared by the bit-scanning evaluators.

/// 0-indexed position of the most significant set bit, i.e. `floor(log2(n))`.
///
/// Callers guarantee `n >= 1`; the result for `n == 0` is meaningless.
#[inline]
#[must_use]
pub fn highest_bit_position(n: u64) -> u32 {
    debug_assert!(n >= 1, "highest_bit_position called with n = 0");
    63 - n.leading_zeros()
}

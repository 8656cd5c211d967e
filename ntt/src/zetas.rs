//! Twiddle-table generation.
//!
//! The tables are evaluated at compile time. Because trait methods can't be
//! called in `const` context and `for` loops are not allowed there, the
//! helpers below work on `i64` with `while` loops, and each field narrows the
//! result to its coefficient width.

/// Reverses the `n` least significant bits of `x`.
#[inline(always)]
pub const fn reverse_bits_msb(x: usize, n: u32) -> usize {
    if n == 0 {
        return 0;
    }
    x.reverse_bits() >> (usize::BITS - n)
}

/// `a * b mod q` in `[0, q)`.
#[inline(always)]
pub const fn mul_mod(a: i64, b: i64, q: i64) -> i64 {
    (a as i128 * b as i128).rem_euclid(q as i128) as i64
}

/// `base^exp mod q` in `[0, q)`.
pub const fn pow_mod(base: i64, mut exp: u64, q: i64) -> i64 {
    let mut result: i64 = 1 % q;
    let mut b: i64 = base.rem_euclid(q);
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, b, q);
        }
        b = mul_mod(b, b, q);
        exp >>= 1;
    }
    result
}

/// Maps `r` in `[0, q)` to `(-q/2, q/2]`.
#[inline(always)]
pub const fn center(r: i64, q: i64) -> i64 {
    if r > q >> 1 { r - q } else { r }
}

/// Returns the table `t[i] = mont * root^brv(i) mod q`, centered, where `brv`
/// reverses the `log2(L)` low bits of `i`.
///
/// With `mont = R mod q` this is the twiddle table consumed by
/// [`crate::transform::ntt`]: entry `i` is the Montgomery form of the root
/// used by the `i`-th butterfly block of the forward pass.
pub const fn bitrev_powers<const L: usize>(q: i64, root: i64, mont: i64) -> [i64; L] {
    assert!(L.is_power_of_two(), "table length must be a power of two");
    let log_l: u32 = L.trailing_zeros();
    let mut table: [i64; L] = [0; L];
    let mut i: usize = 0;
    while i < L {
        table[i] = twiddle(i, log_l, q, root, mont);
        i += 1;
    }
    table
}

/// Entry `i` of a table of `2^log_l` twiddles.
#[inline(always)]
pub const fn twiddle(i: usize, log_l: u32, q: i64, root: i64, mont: i64) -> i64 {
    let power: i64 = pow_mod(root, reverse_bits_msb(i, log_l) as u64, q);
    center(mul_mod(mont.rem_euclid(q), power, q), q)
}

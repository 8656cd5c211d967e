use crate::field::{dilithium, kyber};

/// round(2^26 / q) for q = 3329.
const V: i32 = ((1 << 26) + kyber::Q as i32 / 2) / kyber::Q as i32;

/// round(2^54 / q) for q = 8380417.
const V32: i64 = ((1 << 54) + dilithium::Q as i64 / 2) / dilithium::Q as i64;

/// Barrett reduction; given a 16-bit integer `a`, returns the representative
/// of `a mod q` in `[-(q-1)/2, (q-1)/2]`.
///
/// Exact over the whole `i16` range.
#[inline(always)]
pub const fn barrett_reduce(a: i16) -> i16 {
    let t: i16 = ((V * a as i32 + (1 << 25)) >> 26) as i16;
    a.wrapping_sub(t.wrapping_mul(kyber::Q))
}

/// Barrett reduction for the 32-bit field; same contract as
/// [`barrett_reduce`], exact over the whole `i32` range.
///
/// `|V32 * a| < 2^62`, so the product never leaves `i64`.
#[inline(always)]
pub const fn barrett_reduce_32(a: i32) -> i32 {
    let t: i64 = (V32 * a as i64 + (1 << 53)) >> 54;
    (a as i64 - t * dilithium::Q as i64) as i32
}

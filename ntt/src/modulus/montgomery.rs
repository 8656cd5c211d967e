use crate::field::{dilithium, kyber};
use crate::modulus::Montgomery;

/// Montgomery reduction; given a 32-bit integer `a`, computes the 16-bit
/// integer congruent to `a * R^-1 mod q`, where `R = 2^16`.
///
/// `a` has to be in `[-q * 2^15, q * 2^15)`; the result lies in `(-q, q)`.
#[inline(always)]
pub const fn montgomery_reduce(a: i32) -> i16 {
    debug_assert!(
        a >= -((kyber::Q as i32) << 15) && a < (kyber::Q as i32) << 15,
        "montgomery_reduce: input outside [-q*2^15, q*2^15)"
    );
    let t: i16 = (a as i16).wrapping_mul(kyber::QINV);
    ((a - t as i32 * kyber::Q as i32) >> 16) as i16
}

/// Montgomery reduction for the 32-bit field: `a * R^-1 mod q` with
/// `R = 2^32`, for `a` in `[-q * 2^31, q * 2^31)`.
#[inline(always)]
pub const fn montgomery_reduce_64(a: i64) -> i32 {
    debug_assert!(
        a >= -((dilithium::Q as i64) << 31) && a < (dilithium::Q as i64) << 31,
        "montgomery_reduce_64: input outside [-q*2^31, q*2^31)"
    );
    let t: i32 = (a as i32).wrapping_mul(dilithium::QINV);
    ((a - t as i64 * dilithium::Q as i64) >> 32) as i32
}

/// `a * b * 2^-16 mod q`.
#[inline(always)]
pub const fn fqmul(a: i16, b: Montgomery<i16>) -> i16 {
    montgomery_reduce(a as i32 * b as i32)
}

/// `a * b * 2^-32 mod q`.
#[inline(always)]
pub const fn fqmul_32(a: i32, b: Montgomery<i32>) -> i32 {
    montgomery_reduce_64(a as i64 * b as i64)
}

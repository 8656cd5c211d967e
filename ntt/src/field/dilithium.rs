use crate::field::Field;
use crate::modulus::{barrett, montgomery};
use crate::zetas::{bitrev_powers, center};

pub const Q: i32 = 8380417;
pub const QINV: i32 = 58728449;
/// 2^32 mod q
pub const MONT: i32 = -4186625;
/// 2^64 mod q
pub const R2: i32 = 2365951;
/// mont^2/256
pub const F: i32 = 41978;
/// Primitive 512-th root of unity.
pub const ROOT: i64 = 1753;

pub const ZETAS: [i32; 256] = {
    let wide: [i64; 256] = bitrev_powers::<256>(Q as i64, ROOT, MONT as i64);
    let mut zetas: [i32; 256] = [0; 256];
    let mut i: usize = 0;
    while i < 256 {
        zetas[i] = wide[i] as i32;
        i += 1;
    }
    zetas
};

/// 32-bit field with `q = 8380417` and `R = 2^32`.
///
/// The transform runs down to single coefficients, so products in the
/// transformed domain are coefficient-wise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dilithium;

impl Field for Dilithium {
    type Elem = i32;
    type Wide = i64;

    const NAME: &'static str = "dilithium";
    const Q: i32 = Q;
    const QINV: i32 = QINV;
    const MONT: i32 = MONT;
    const R2: i32 = R2;
    const F: i32 = F;
    const R_BITS: u32 = 32;
    const ROOT: i64 = ROOT;
    const BLOCK: usize = 1;
    const LAYERS: usize = 8;
    const ZETAS: &'static [i32] = &ZETAS;

    #[inline(always)]
    fn barrett_reduce(a: i32) -> i32 {
        barrett::barrett_reduce_32(a)
    }

    #[inline(always)]
    fn montgomery_reduce(a: i64) -> i32 {
        montgomery::montgomery_reduce_64(a)
    }

    #[inline(always)]
    fn widening_mul(a: i32, b: i32) -> i64 {
        a as i64 * b as i64
    }

    #[inline(always)]
    fn to_i64(a: i32) -> i64 {
        a as i64
    }

    #[inline(always)]
    fn from_i64(a: i64) -> i32 {
        center(a.rem_euclid(Q as i64), Q as i64) as i32
    }
}

use crate::field::Field;
use crate::modulus::{barrett, montgomery};
use crate::zetas::center;

pub const Q: i16 = 3329;
pub const QINV: i16 = -3327;
/// 2^16 mod q
pub const MONT: i16 = -1044;
/// 2^32 mod q
pub const R2: i16 = 1353;
/// mont^2/128
pub const F: i16 = 1441;
/// Primitive 256-th root of unity.
pub const ROOT: i64 = 17;

pub const ZETAS: [i16; 128] = [
    -1044, -758, -359, -1517, 1493, 1422, 287, 202, -171, 622, 1577, 182, 962, -1202, -1474, 1468,
    573, -1325, 264, 383, -829, 1458, -1602, -130, -681, 1017, 732, 608, -1542, 411, -205, -1571,
    1223, 652, -552, 1015, -1293, 1491, -282, -1544, 516, -8, -320, -666, -1618, -1162, 126, 1469,
    -853, -90, -271, 830, 107, -1421, -247, -951, -398, 961, -1508, -725, 448, -1065, 677, -1275,
    -1103, 430, 555, 843, -1251, 871, 1550, 105, 422, 587, 177, -235, -291, -460, 1574, 1653, -246,
    778, 1159, -147, -777, 1483, -602, 1119, -1590, 644, -872, 349, 418, 329, -156, -75, 817, 1097,
    603, 610, 1322, -1285, -1465, 384, -1215, -136, 1218, -1335, -874, 220, -1187, -1659, -1185,
    -1530, -1278, 794, -1510, -854, -870, 478, -108, -308, 996, 991, 958, -1460, 1522, 1628,
];

/// 16-bit field with `q = 3329` and `R = 2^16`.
///
/// The transform stops at degree-1 blocks, so products in the transformed
/// domain go through [`crate::basemul`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Kyber;

impl Field for Kyber {
    type Elem = i16;
    type Wide = i32;

    const NAME: &'static str = "kyber";
    const Q: i16 = Q;
    const QINV: i16 = QINV;
    const MONT: i16 = MONT;
    const R2: i16 = R2;
    const F: i16 = F;
    const R_BITS: u32 = 16;
    const ROOT: i64 = ROOT;
    const BLOCK: usize = 2;
    const LAYERS: usize = 7;
    const ZETAS: &'static [i16] = &ZETAS;

    #[inline(always)]
    fn barrett_reduce(a: i16) -> i16 {
        barrett::barrett_reduce(a)
    }

    #[inline(always)]
    fn montgomery_reduce(a: i32) -> i16 {
        montgomery::montgomery_reduce(a)
    }

    #[inline(always)]
    fn widening_mul(a: i16, b: i16) -> i32 {
        a as i32 * b as i32
    }

    #[inline(always)]
    fn to_i64(a: i16) -> i64 {
        a as i64
    }

    #[inline(always)]
    fn from_i64(a: i64) -> i16 {
        center(a.rem_euclid(Q as i64), Q as i64) as i16
    }
}

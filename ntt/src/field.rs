pub mod dilithium;
pub mod kyber;

use std::fmt::Debug;
use std::ops::{Add, Neg, Sub};

pub use dilithium::Dilithium;
pub use kyber::Kyber;

/// Selects a prime field and the constants the transforms need over it.
///
/// Every implementor fixes, at compile time, the coefficient width, the
/// modulus `q`, the Montgomery radix `R = 2^R_BITS` and a twiddle table that
/// matches all of them. Mixing buffers or tables of two implementors is a
/// contract violation that the type system rules out.
///
/// Two implementations are provided: [`Kyber`] (16-bit, `q = 3329`,
/// incomplete 7-layer transform) and [`Dilithium`] (32-bit, `q = 8380417`,
/// complete 8-layer transform).
pub trait Field: Sized + Copy + Debug + Default + PartialEq + Eq + Send + Sync + 'static {
    /// Coefficient type.
    type Elem: Copy
        + Debug
        + Default
        + PartialEq
        + Eq
        + Add<Output = Self::Elem>
        + Sub<Output = Self::Elem>
        + Neg<Output = Self::Elem>
        + Send
        + Sync
        + 'static;

    /// Double-width accumulator consumed by [`Field::montgomery_reduce`].
    type Wide: Copy + Debug;

    /// Short name used in logs and errors.
    const NAME: &'static str;

    /// The prime modulus.
    const Q: Self::Elem;

    /// `q^-1 mod R`, as a signed coefficient.
    const QINV: Self::Elem;

    /// `R mod q`, centered: the Montgomery form of 1.
    const MONT: Self::Elem;

    /// `R^2 mod q`, centered. Multiplying by it with [`Field::fqmul`] enters the
    /// Montgomery domain.
    const R2: Self::Elem;

    /// `R^2 / (N / BLOCK) mod q`, applied at the end of the inverse transform.
    const F: Self::Elem;

    /// `log2(R)`.
    const R_BITS: u32;

    /// Primitive `2 * N / BLOCK`-th root of unity the twiddles are powers of.
    const ROOT: i64;

    /// Size of the blocks left untouched by the transform: 2 for an
    /// incomplete transform into `Z_q[X]/(X^2 - zeta)`, 1 for a complete one.
    const BLOCK: usize;

    /// `log2(N / BLOCK)`.
    const LAYERS: usize;

    /// Twiddle factors `MONT * ROOT^brv(i)`, centered, indexed in the order the
    /// forward transform consumes them. Entry 0 is never read.
    const ZETAS: &'static [Self::Elem];

    /// Centered representative of `a mod q`.
    fn barrett_reduce(a: Self::Elem) -> Self::Elem;

    /// `a * R^-1 mod q`, with `|a| < q * R / 2`.
    fn montgomery_reduce(a: Self::Wide) -> Self::Elem;

    /// Exact product of two coefficients.
    fn widening_mul(a: Self::Elem, b: Self::Elem) -> Self::Wide;

    fn to_i64(a: Self::Elem) -> i64;

    /// Centered representative of `a mod q`.
    fn from_i64(a: i64) -> Self::Elem;

    /// `a * b * R^-1 mod q`.
    #[inline(always)]
    fn fqmul(a: Self::Elem, b: Self::Elem) -> Self::Elem {
        Self::montgomery_reduce(Self::widening_mul(a, b))
    }

    #[inline(always)]
    fn q() -> i64 {
        Self::to_i64(Self::Q)
    }
}

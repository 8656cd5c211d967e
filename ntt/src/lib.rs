//! # ntt
//!
//! Number-theoretic transform over the small prime fields of module-lattice
//! schemes: `q = 3329` with 16-bit coefficients ([`Kyber`]) and `q = 8380417`
//! with 32-bit coefficients ([`Dilithium`]).
//!
//! The crate turns multiplication in `Z_q[X]/(X^256 + 1)` into cheap
//! pointwise work:
//!
//! 1. [`ntt`] maps a length-256 buffer from standard order to bit-reversed
//!    order in place.
//! 2. [`basemul_montgomery`] multiplies two transformed buffers block by block
//!    ([`basemul`] on pairs for [`Kyber`], single coefficients for
//!    [`Dilithium`]).
//! 3. [`invntt`] maps the product back to standard order and folds in the
//!    correction factor `F = R^2 / n`.
//!
//! ## Field parameterization
//!
//! All constants (`q`, `R`, `QINV`, `F`, the twiddle table) are associated
//! consts of a [`Field`] implementor, so switching parameterization is a
//! compile-time choice made through the type parameter. [`ActiveField`] names
//! the one selected by the `dilithium` cargo feature.
//!
//! ## Representation
//!
//! Coefficients are plain signed integers; [`modulus::Montgomery`] marks the
//! values that carry a factor `R`. Buffers handed to the raw functions are
//! `[F::Elem; N]` and callers track their order. [`Poly`] and [`NttPoly`]
//! encode the order in the type instead.
//!
//! ## Contract
//!
//! Nothing on the arithmetic path is range-checked in release builds: inputs
//! outside the documented domains give silently wrong results. Domain
//! preconditions are `debug_assert!`ed. [`params::validate`] can be used once
//! at start-up to check that a [`Field`] implementor is self-consistent.

pub mod basemul;
pub mod error;
pub mod field;
pub mod modulus;
pub mod params;
pub mod poly;
pub mod transform;
pub mod zetas;

pub use basemul::{basemul, basemul_montgomery};
pub use error::Error;
pub use field::{Dilithium, Field, Kyber};
pub use modulus::{barrett_reduce, barrett_reduce_32, fqmul, fqmul_32, montgomery_reduce, montgomery_reduce_64};
pub use poly::{NttPoly, Poly};
pub use transform::{invntt, ntt};

/// Number of coefficients of every polynomial buffer.
pub const N: usize = 256;

/// Field selected for this build.
#[cfg(not(feature = "dilithium"))]
pub type ActiveField = Kyber;

/// Field selected for this build.
#[cfg(feature = "dilithium")]
pub type ActiveField = Dilithium;

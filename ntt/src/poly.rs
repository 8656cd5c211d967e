//! Owned polynomial buffers that carry their coefficient order in the type.
//!
//! [`Poly`] is always in standard order and [`NttPoly`] always in bit-reversed
//! order, so the only way between the two is through [`Poly::ntt`] and
//! [`NttPoly::invntt`].

use std::ops::{Add, Sub};

use itertools::izip;

use crate::N;
use crate::basemul::basemul_montgomery;
use crate::error::Error;
use crate::field::Field;
use crate::transform::{invntt, ntt};

/// Polynomial of `Z_q[X]/(X^N + 1)` in standard order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly<F: Field>(pub [F::Elem; N]);

/// Polynomial of `Z_q[X]/(X^N + 1)` in bit-reversed (transformed) order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NttPoly<F: Field>(pub [F::Elem; N]);

macro_rules! impl_buffer {
    ($poly:ident) => {
        impl<F: Field> $poly<F> {
            pub fn zero() -> Self {
                Self([F::Elem::default(); N])
            }

            pub fn from_fn(f: impl FnMut(usize) -> F::Elem) -> Self {
                Self(std::array::from_fn(f))
            }

            /// Copies `coeffs` into a new buffer; fails unless it holds exactly
            /// [`N`] coefficients.
            pub fn from_slice(coeffs: &[F::Elem]) -> Result<Self, Error> {
                if coeffs.len() != N {
                    return Err(Error::Length {
                        expected: N,
                        found: coeffs.len(),
                    });
                }
                let mut poly: Self = Self::zero();
                poly.0.copy_from_slice(coeffs);
                Ok(poly)
            }

            pub fn coeffs(&self) -> &[F::Elem; N] {
                &self.0
            }

            pub fn coeffs_mut(&mut self) -> &mut [F::Elem; N] {
                &mut self.0
            }

            /// Replaces every coefficient by its centered representative.
            pub fn reduce(&mut self) {
                self.0.iter_mut().for_each(|x| *x = F::barrett_reduce(*x));
            }

            /// Multiplies every coefficient by `R`.
            pub fn to_montgomery(&mut self) {
                self.0.iter_mut().for_each(|x| *x = F::fqmul(*x, F::R2));
            }
        }

        impl<F: Field> Default for $poly<F> {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<F: Field> AsRef<[F::Elem]> for $poly<F> {
            fn as_ref(&self) -> &[F::Elem] {
                &self.0
            }
        }

        /// Coefficient-wise, without reduction.
        impl<F: Field> Add for &$poly<F> {
            type Output = $poly<F>;

            fn add(self, rhs: Self) -> $poly<F> {
                $poly::from_fn(|i| self.0[i] + rhs.0[i])
            }
        }

        /// Coefficient-wise, without reduction.
        impl<F: Field> Sub for &$poly<F> {
            type Output = $poly<F>;

            fn sub(self, rhs: Self) -> $poly<F> {
                $poly::from_fn(|i| self.0[i] - rhs.0[i])
            }
        }
    };
}

impl_buffer!(Poly);
impl_buffer!(NttPoly);

impl<F: Field> Poly<F> {
    /// Forward transform followed by a reduction, so the result is a valid
    /// input for [`NttPoly::mul_montgomery`].
    pub fn ntt(mut self) -> NttPoly<F> {
        ntt::<F>(&mut self.0);
        let mut out: NttPoly<F> = NttPoly(self.0);
        out.reduce();
        out
    }

    /// Negacyclic product `self * other mod (X^N + 1)`, coefficients in
    /// `(-q, q)`. Both operands should be reduced.
    pub fn mul(&self, other: &Self) -> Self {
        let a: NttPoly<F> = self.clone().ntt();
        let b: NttPoly<F> = other.clone().ntt();
        a.mul_montgomery(&b).invntt()
    }
}

impl<F: Field> NttPoly<F> {
    /// `self * other * R^-1`, in the transformed domain. Both operands should be
    /// reduced.
    pub fn mul_montgomery(&self, other: &Self) -> Self {
        let mut r: Self = Self::zero();
        basemul_montgomery::<F>(&mut r.0, &self.0, &other.0);
        r
    }

    /// Inverse transform; the result carries an extra factor `R`.
    pub fn invntt(mut self) -> Poly<F> {
        invntt::<F>(&mut self.0);
        Poly(self.0)
    }

    /// Pointwise accumulation `sum_i a[i] * b[i] * R^-1`, reduced.
    pub fn dot_montgomery(a: &[Self], b: &[Self]) -> Self {
        let mut acc: Self = Self::zero();
        izip!(a.iter(), b.iter()).for_each(|(a, b)| {
            acc = &acc + &a.mul_montgomery(b);
            acc.reduce();
        });
        acc
    }
}

//! Forward and inverse number-theoretic transforms over a [`Field`].
//!
//! Both transforms work in place on a buffer of [`N`] coefficients and walk
//! the same layer schedule ([`layers`]): the forward pass goes from the widest
//! butterflies (`len = 128`) down to `len = BLOCK`, consuming twiddles
//! `zetas[1], zetas[2], ...`; the inverse pass goes back up and consumes the
//! same twiddles in exactly the reverse order.
//!
//! # Orders
//!
//! [`ntt`] takes standard order and leaves bit-reversed order; [`invntt`]
//! takes bit-reversed order and leaves standard order. Nothing in the buffer
//! records which order it is in.
//!
//! # Scaling
//!
//! The twiddles are stored in Montgomery form so each `fqmul` by a twiddle is
//! an exact multiplication by the root. The inverse pass accumulates a factor
//! `N / BLOCK` and then multiplies by `F = R^2 / (N / BLOCK)` through one more
//! `fqmul`, leaving every coefficient multiplied by `R`:
//!
//! ```text
//! invntt(ntt(x)) = x * R mod q
//! ```
//!
//! which is the factor that cancels the `R^-1` carried by
//! [`crate::basemul_montgomery`] products.

use std::ops::Range;

use itertools::izip;

use crate::N;
use crate::field::Field;

/// One butterfly layer: blocks of `2 * len` coefficients, block `s` using
/// twiddle `zetas[twiddles.start + s]` in the forward direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub len: usize,
    pub twiddles: Range<usize>,
}

/// Layers of the forward transform, in forward order.
pub fn layers<F: Field>() -> impl DoubleEndedIterator<Item = Layer> + ExactSizeIterator {
    (0..F::LAYERS).map(|layer| Layer {
        len: (N >> 1) >> layer,
        twiddles: (1 << layer)..(2 << layer),
    })
}

/// Inplace number-theoretic transform.
/// Input is in standard order, output is in bit-reversed order.
///
/// No reduction is applied to the butterfly sums: each layer grows the
/// coefficients by less than `q`, so inputs with `|a[i]| < q` leave with
/// `|a[i]| < (LAYERS + 1) * q`.
pub fn ntt<F: Field>(a: &mut [F::Elem; N]) {
    layers::<F>().for_each(|layer| {
        let len: usize = layer.len;
        izip!(a.chunks_exact_mut(len << 1), &F::ZETAS[layer.twiddles]).for_each(|(block, zeta)| {
            let (lo, hi) = block.split_at_mut(len);
            izip!(lo.iter_mut(), hi.iter_mut()).for_each(|(x, y)| {
                let t: F::Elem = F::fqmul(*zeta, *y);
                *y = *x - t;
                *x = *x + t;
            });
        });
    });
}

/// Inplace inverse number-theoretic transform and multiplication by the
/// Montgomery factor `R`.
/// Input is in bit-reversed order, output is in standard order.
///
/// For [`crate::Kyber`] the first layer adds coefficient pairs in 16 bits,
/// so `|a[j]| + |a[j + BLOCK]|` must stay below `2^15`; reduced buffers and
/// [`crate::basemul_montgomery`] outputs satisfy this.
pub fn invntt<F: Field>(a: &mut [F::Elem; N]) {
    layers::<F>().rev().for_each(|layer| {
        let len: usize = layer.len;
        izip!(a.chunks_exact_mut(len << 1), F::ZETAS[layer.twiddles].iter().rev()).for_each(|(block, zeta)| {
            let (lo, hi) = block.split_at_mut(len);
            izip!(lo.iter_mut(), hi.iter_mut()).for_each(|(x, y)| {
                let t: F::Elem = *x;
                *x = F::barrett_reduce(t + *y);
                *y = F::fqmul(*zeta, *y - t);
            });
        });
    });

    a.iter_mut().for_each(|x| *x = F::fqmul(*x, F::F));
}

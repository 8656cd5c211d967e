//! Start-up consistency check of a [`Field`] implementor.
//!
//! Every constant is re-derived from `Q`, `R_BITS` and `ROOT` and compared
//! with the one the implementor declares, then the twiddle table is checked
//! entry by entry. The transforms never run these checks themselves.

use tracing::{debug, trace, warn};

use crate::N;
use crate::error::Error;
use crate::field::Field;
use crate::transform::layers;
use crate::zetas::{pow_mod, twiddle};

fn reject(err: Error) -> Result<(), Error> {
    warn!(%err, "field parameters rejected");
    Err(err)
}

fn check_constant<F: Field>(name: &'static str, declared: F::Elem, expected: i64) -> Result<(), Error> {
    let q: i64 = F::q();
    let found: i64 = F::to_i64(declared);
    if found.rem_euclid(q) != expected.rem_euclid(q) {
        return reject(Error::Constant {
            field: F::NAME,
            name,
            expected: expected.rem_euclid(q),
            found,
        });
    }
    trace!(field = F::NAME, name, found, "constant ok");
    Ok(())
}

/// Checks that the constants and the twiddle table of `F` agree with each
/// other. Returns the first mismatch.
pub fn validate<F: Field>() -> Result<(), Error> {
    let q: i64 = F::q();
    let r: i128 = 1i128 << F::R_BITS;
    let r_mod_q: i64 = (r % q as i128) as i64;
    let blocks: usize = N / F::BLOCK;

    let found: i64 = (q as i128 * F::to_i64(F::QINV) as i128).rem_euclid(r) as i64;
    if found != 1 {
        return reject(Error::MontgomeryInverse {
            field: F::NAME,
            found,
            r_bits: F::R_BITS,
        });
    }

    check_constant::<F>("MONT", F::MONT, r_mod_q)?;
    check_constant::<F>("R2", F::R2, r_mod_q * r_mod_q % q)?;

    // R^2 / blocks, with the inverse from Fermat.
    let blocks_inv: i64 = pow_mod(blocks as i64, (q - 2) as u64, q);
    check_constant::<F>("F", F::F, (r_mod_q * r_mod_q % q) * blocks_inv % q)?;

    if 1usize << F::LAYERS != blocks {
        return reject(Error::Constant {
            field: F::NAME,
            name: "LAYERS",
            expected: blocks.trailing_zeros() as i64,
            found: F::LAYERS as i64,
        });
    }

    if pow_mod(F::ROOT, blocks as u64, q) != q - 1 {
        return reject(Error::RootOrder {
            field: F::NAME,
            root: F::ROOT,
            order: 2 * blocks as i64,
        });
    }

    if F::ZETAS.len() != blocks {
        return reject(Error::TableLength {
            field: F::NAME,
            expected: blocks,
            found: F::ZETAS.len(),
        });
    }

    let log_l: u32 = F::LAYERS as u32;
    let check_twiddle = |index: usize| -> Result<(), Error> {
        let expected: i64 = twiddle(index, log_l, q, F::ROOT, r_mod_q);
        let found: i64 = F::to_i64(F::ZETAS[index]);
        if found != expected {
            return reject(Error::Twiddle {
                field: F::NAME,
                index,
                expected,
                found,
            });
        }
        Ok(())
    };

    check_twiddle(0)?;
    for layer in layers::<F>() {
        trace!(field = F::NAME, len = layer.len, twiddles = ?layer.twiddles, "checking layer");
        for index in layer.twiddles {
            check_twiddle(index)?;
        }
    }

    debug!(field = F::NAME, q, r_bits = F::R_BITS, layers = F::LAYERS, "field parameters validated");
    Ok(())
}

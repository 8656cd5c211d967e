//! Products in the transformed domain.

use itertools::izip;

use crate::N;
use crate::field::Field;
use crate::modulus::Montgomery;

/// Multiplication of polynomials in `Z_q[X]/(X^2 - zeta)`.
///
/// Returns `(a0 + a1 X)(b0 + b1 X) * R^-1` reduced modulo `X^2 - zeta`. The
/// two sums are left unreduced: each term lies in `(-q, q)`.
#[inline(always)]
pub fn basemul<F: Field>(a: &[F::Elem; 2], b: &[F::Elem; 2], zeta: Montgomery<F::Elem>) -> [F::Elem; 2] {
    [
        F::fqmul(F::fqmul(a[1], b[1]), zeta) + F::fqmul(a[0], b[0]),
        F::fqmul(a[0], b[1]) + F::fqmul(a[1], b[0]),
    ]
}

/// Multiplies two buffers in bit-reversed order and writes `a * b * R^-1`
/// into `r`.
///
/// Incomplete transforms (`BLOCK = 2`) multiply each quadruple as two
/// [`basemul`]s with twiddles `zetas[N/4 + i]` and `-zetas[N/4 + i]`; complete
/// ones are coefficient-wise. Inputs should be reduced.
pub fn basemul_montgomery<F: Field>(r: &mut [F::Elem; N], a: &[F::Elem; N], b: &[F::Elem; N]) {
    match F::BLOCK {
        1 => izip!(r.iter_mut(), a.iter(), b.iter()).for_each(|(r, a, b)| *r = F::fqmul(*a, *b)),
        2 => izip!(
            r.chunks_exact_mut(4),
            a.chunks_exact(4),
            b.chunks_exact(4),
            &F::ZETAS[N >> 2..]
        )
        .for_each(|(r, a, b, zeta)| {
            let [r0, r1] = basemul::<F>(&[a[0], a[1]], &[b[0], b[1]], *zeta);
            let [r2, r3] = basemul::<F>(&[a[2], a[3]], &[b[2], b[3]], -*zeta);
            r.copy_from_slice(&[r0, r1, r2, r3]);
        }),
        block => unreachable!("unsupported block size {block}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Dilithium, Kyber};
    use num_bigint::BigInt;
    use num_traits::ToPrimitive;
    use sampling::source::Source;

    /// `(a0 + a1 X)(b0 + b1 X) mod (X^2 - zeta)` scaled by `R^-1`, in `[0, q)`.
    fn schoolbook<F: Field>(a: [i64; 2], b: [i64; 2], zeta: i64) -> [i64; 2] {
        let q: BigInt = BigInt::from(F::q());
        let r: BigInt = BigInt::from(1) << F::R_BITS;
        let r_inv: BigInt = r.modpow(&(&q - BigInt::from(2)), &q);
        let big = |x: i64| BigInt::from(x);
        // X^2 = zeta
        let c0: BigInt = big(a[0]) * big(b[0]) + big(a[1]) * big(b[1]) * big(zeta);
        let c1: BigInt = big(a[0]) * big(b[1]) + big(a[1]) * big(b[0]);
        [c0, c1].map(|c| ((c * &r_inv % &q + &q) % &q).to_i64().unwrap())
    }

    fn basemul_matches_schoolbook<F: Field>(source: &mut Source) {
        let q: i64 = F::q();
        let mont: i64 = F::to_i64(F::MONT);
        let a: [i64; 2] = [source.next_centered(q), source.next_centered(q)];
        let b: [i64; 2] = [source.next_centered(q), source.next_centered(q)];
        let zeta: i64 = source.next_centered(q);

        let have: [F::Elem; 2] = basemul::<F>(
            &a.map(F::from_i64),
            &b.map(F::from_i64),
            F::from_i64(zeta * mont),
        );
        let want: [i64; 2] = schoolbook::<F>(a, b, zeta);
        izip!(have.iter(), want.iter()).for_each(|(have, want)| {
            assert!(F::to_i64(*have).abs() < 2 * q);
            assert_eq!(F::to_i64(*have).rem_euclid(q), *want);
        });
    }

    #[test]
    fn basemul_random() {
        let mut source: Source = Source::new([3u8; 32]);
        (0..1024).for_each(|_| {
            basemul_matches_schoolbook::<Kyber>(&mut source);
            basemul_matches_schoolbook::<Dilithium>(&mut source);
        });
    }

    #[test]
    fn basemul_extremes() {
        let h: i16 = (Kyber::Q - 1) / 2;
        [[h, h], [-h, -h], [h, -h]].into_iter().for_each(|a: [i16; 2]| {
            [h, -h, Kyber::MONT].into_iter().for_each(|zeta: i16| {
                let have: [i16; 2] = basemul::<Kyber>(&a, &a, zeta);
                let zeta_plain: i64 = (zeta as i64 * 169).rem_euclid(Kyber::q());
                let want: [i64; 2] = schoolbook::<Kyber>(a.map(i64::from), a.map(i64::from), zeta_plain);
                assert_eq!(have.map(|x| (x as i64).rem_euclid(Kyber::q())), want);
            });
        });
    }

    #[test]
    fn identity_pair() {
        // 1 * b with 1 in Montgomery form returns b.
        let one: [i16; 2] = [Kyber::MONT, 0];
        let b: [i16; 2] = [1234, -567];
        let r: [i16; 2] = basemul::<Kyber>(&one, &b, Kyber::ZETAS[64]);
        assert_eq!(r.map(|x| x.rem_euclid(Kyber::Q)), b.map(|x| x.rem_euclid(Kyber::Q)));
    }

    fn whole_buffer<F: Field>(source: &mut Source) {
        let q: i64 = F::q();
        let a: [F::Elem; N] = std::array::from_fn(|_| F::from_i64(source.next_centered(q)));
        let b: [F::Elem; N] = std::array::from_fn(|_| F::from_i64(source.next_centered(q)));
        let mut r: [F::Elem; N] = [F::Elem::default(); N];
        basemul_montgomery::<F>(&mut r, &a, &b);

        let block: usize = F::BLOCK;
        (0..N / block).for_each(|i| {
            let j: usize = i * block;
            if block == 1 {
                let want: i64 = schoolbook::<F>([F::to_i64(a[j]), 0], [F::to_i64(b[j]), 0], 0)[0];
                assert_eq!(F::to_i64(r[j]).rem_euclid(q), want);
            } else {
                // zeta in Montgomery form; undo it for the reference.
                let zeta_m: i64 = F::to_i64(F::ZETAS[(N >> 2) + i / 2]) * if i % 2 == 0 { 1 } else { -1 };
                let zeta: i64 = schoolbook::<F>([zeta_m, 0], [1, 0], 0)[0];
                let pa: [i64; 2] = [F::to_i64(a[j]), F::to_i64(a[j + 1])];
                let pb: [i64; 2] = [F::to_i64(b[j]), F::to_i64(b[j + 1])];
                let want: [i64; 2] = schoolbook::<F>(pa, pb, zeta);
                assert_eq!(F::to_i64(r[j]).rem_euclid(q), want[0]);
                assert_eq!(F::to_i64(r[j + 1]).rem_euclid(q), want[1]);
            }
        });
    }

    #[test]
    fn basemul_montgomery_matches_blockwise_reference() {
        let mut source: Source = Source::new([4u8; 32]);
        (0..16).for_each(|_| {
            whole_buffer::<Kyber>(&mut source);
            whole_buffer::<Dilithium>(&mut source);
        });
    }
}

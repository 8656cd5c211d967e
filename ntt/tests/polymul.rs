use itertools::izip;
use ntt::{Dilithium, Field, Kyber, N, NttPoly, Poly, basemul_montgomery, invntt, ntt};
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use sampling::source::Source;

#[test]
fn polynomial_multiplication() {
    let seed: [u8; 32] = [0; 32];
    let mut source: Source = Source::new(seed);

    sub_test("test_poly_mul::<Kyber>", || test_poly_mul::<Kyber>(&mut source));
    sub_test("test_poly_mul::<Dilithium>", || test_poly_mul::<Dilithium>(&mut source));
    sub_test("test_raw_pipeline::<Kyber>", || test_raw_pipeline::<Kyber>(&mut source));
    sub_test("test_raw_pipeline::<Dilithium>", || test_raw_pipeline::<Dilithium>(&mut source));
    sub_test("test_extreme_coefficients::<Kyber>", || test_extreme_coefficients::<Kyber>());
    sub_test("test_extreme_coefficients::<Dilithium>", || test_extreme_coefficients::<Dilithium>());
}

fn sub_test<F: FnOnce()>(name: &str, f: F) {
    println!("Running {}", name);
    f();
}

/// `a * b mod (X^N + 1, q)` in `[0, q)`.
fn schoolbook<F: Field>(a: &[F::Elem; N], b: &[F::Elem; N]) -> Vec<i64> {
    let mut c: Vec<BigInt> = vec![BigInt::zero(); N];
    (0..N).for_each(|i| {
        (0..N).for_each(|j| {
            let prod: BigInt = BigInt::from(F::to_i64(a[i])) * BigInt::from(F::to_i64(b[j]));
            if i + j < N {
                c[i + j] += prod;
            } else {
                c[i + j - N] -= prod;
            }
        });
    });
    let q: BigInt = BigInt::from(F::q());
    c.into_iter()
        .map(|x| (((x % &q) + &q) % &q).to_i64().unwrap())
        .collect()
}

fn random_poly<F: Field>(source: &mut Source) -> Poly<F> {
    Poly::from_fn(|_| F::from_i64(source.next_centered(F::q())))
}

fn assert_matches<F: Field>(have: &[F::Elem; N], want: &[i64]) {
    let q: i64 = F::q();
    izip!(have.iter(), want.iter()).for_each(|(have, want)| {
        assert!(F::to_i64(*have).abs() < q);
        assert_eq!(F::to_i64(*have).rem_euclid(q), *want);
    });
}

fn test_poly_mul<F: Field>(source: &mut Source) {
    (0..4).for_each(|_| {
        let a: Poly<F> = random_poly(source);
        let b: Poly<F> = random_poly(source);
        let c: Poly<F> = a.mul(&b);
        assert_matches::<F>(c.coeffs(), &schoolbook::<F>(a.coeffs(), b.coeffs()));
    });
}

/// Same product, driven through the free functions.
fn test_raw_pipeline<F: Field>(source: &mut Source) {
    let a: Poly<F> = random_poly(source);
    let b: Poly<F> = random_poly(source);

    let mut a_hat: [F::Elem; N] = a.0;
    let mut b_hat: [F::Elem; N] = b.0;
    ntt::<F>(&mut a_hat);
    ntt::<F>(&mut b_hat);
    a_hat.iter_mut().for_each(|x| *x = F::barrett_reduce(*x));
    b_hat.iter_mut().for_each(|x| *x = F::barrett_reduce(*x));

    let mut c: [F::Elem; N] = [F::Elem::default(); N];
    basemul_montgomery::<F>(&mut c, &a_hat, &b_hat);
    invntt::<F>(&mut c);

    assert_matches::<F>(&c, &schoolbook::<F>(a.coeffs(), b.coeffs()));
}

fn test_extreme_coefficients<F: Field>() {
    let half: i64 = F::q() / 2;
    let a: Poly<F> = Poly::from_fn(|i| F::from_i64(if i % 2 == 0 { half } else { -half }));
    let b: Poly<F> = Poly::from_fn(|_| F::from_i64(half));
    let c: Poly<F> = a.mul(&b);
    assert_matches::<F>(c.coeffs(), &schoolbook::<F>(a.coeffs(), b.coeffs()));

    let sq: NttPoly<F> = b.clone().ntt();
    let c: Poly<F> = sq.mul_montgomery(&sq).invntt();
    assert_matches::<F>(c.coeffs(), &schoolbook::<F>(b.coeffs(), b.coeffs()));
}

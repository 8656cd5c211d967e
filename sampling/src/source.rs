use rand::Rng;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use rand_core::RngCore;

/// Deterministic ChaCha8 stream used to draw test and benchmark inputs.
pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn branch(&mut self) -> ([u8; 32], Self) {
        let seed: [u8; 32] = self.new_seed();
        (seed, Source::new(seed))
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.fill_bytes(&mut seed);
        seed
    }

    #[inline(always)]
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32
    }

    #[inline(always)]
    pub fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }

    /// Uniform value in `[-(q-1)/2, (q-1)/2]`, the centered residues of an odd `q`.
    #[inline(always)]
    pub fn next_centered(&mut self, q: i64) -> i64 {
        debug_assert!(q & 1 == 1, "invalid modulus: q = {} is even", q);
        let half: i64 = (q - 1) >> 1;
        self.random_range(-half..=half)
    }

    /// Uniform value in `(-bound, bound)`.
    #[inline(always)]
    pub fn next_bounded(&mut self, bound: i64) -> i64 {
        debug_assert!(bound > 0, "invalid bound: {} <= 0", bound);
        self.random_range(-bound + 1..bound)
    }

    pub fn fill_centered(&mut self, q: i64, a: &mut [i64]) {
        a.iter_mut().for_each(|x| *x = self.next_centered(q));
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}

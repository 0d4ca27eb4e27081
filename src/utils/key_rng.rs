//! # KeyRng: the generator behind every hash draw
//!
//! `KeyRng` implements the XOROSHIRO128+ algorithm and exposes it through the
//! `rand` traits. A build owns exactly one generator and lends it by `&mut` to
//! every first- and second-level draw, so sibling buckets never reuse a seed
//! and a fixed seed reproduces the whole construction.

use rand::{Error, RngCore, SeedableRng};

/// Multiplier used to spread a seed across both state words.
const SEED_K1: u64 = 0x517cc1b727220a95;
/// Second multiplier so the two state words start out different.
const SEED_K2: u64 = 0x9e3779b97f4a7c15;

/// Branchless seed mixer.
///
/// Zero is remapped to one before mixing so a zero seed still yields a
/// non-zero state.
#[inline(always)]
pub fn mix_seed(value: u64, multiplier: u64) -> u64 {
    let mask = ((value == 0) as u64).wrapping_neg();
    let adjusted = value | (mask & 1);
    adjusted.wrapping_mul(multiplier) ^ (adjusted >> 32)
}

/// An XOROSHIRO128+ random number generator.
///
/// # Example
/// ```rust
/// use fixedset::KeyRng;
/// use rand::Rng;
///
/// let mut rng = KeyRng::new(42);
/// let value: u64 = rng.gen_range(1..100);
/// assert!((1..100).contains(&value));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyRng {
    state_a: u64,
    state_b: u64,
}

impl KeyRng {
    /// Creates a generator seeded with `seed`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self::from_state(mix_seed(seed, SEED_K1), mix_seed(seed, SEED_K2))
    }

    /// Creates a generator seeded from the operating system's entropy source.
    pub fn from_os_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Builds a generator from raw state, replacing the forbidden all-zero state.
    fn from_state(state_a: u64, state_b: u64) -> Self {
        if state_a == 0 && state_b == 0 {
            return Self::new(0);
        }
        Self { state_a, state_b }
    }

    #[inline(always)]
    fn next_raw(&mut self) -> u64 {
        let s0 = self.state_a;
        let mut s1 = self.state_b;
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state_a = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state_b = s1.rotate_left(37);

        result
    }
}

impl RngCore for KeyRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // The low bits of XOROSHIRO128+ are the weakest.
        (self.next_raw() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_raw()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for KeyRng {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut a = [0u8; 8];
        let mut b = [0u8; 8];
        a.copy_from_slice(&seed[..8]);
        b.copy_from_slice(&seed[8..]);
        Self::from_state(u64::from_le_bytes(a), u64::from_le_bytes(b))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = KeyRng::new(7);
        let mut b = KeyRng::new(7);
        for _ in 0..64 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn zero_seed_is_not_stuck() {
        let mut rng = KeyRng::from_seed([0; 16]);
        let first = rng.next_u64();
        assert!((0..16).any(|_| rng.next_u64() != first));
    }

    #[test]
    fn gen_range_stays_in_bounds() {
        let mut rng = KeyRng::new(99);
        for _ in 0..1000 {
            let v: i64 = rng.gen_range(1..2_147_483_647);
            assert!((1..2_147_483_647).contains(&v));
        }
    }

    #[test]
    fn fill_bytes_handles_ragged_tail() {
        let mut rng = KeyRng::new(3);
        let mut buf = [0u8; 13];
        rng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }
}

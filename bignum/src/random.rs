//! Random sampling.

use crate::{Bn, Error, Result};
use num_bigint::BigInt;
use num_traits::One;
use rand_core::CryptoRngCore;

#[cfg(feature = "getrandom")]
use rand_core::OsRng;

impl Bn {
    /// Samples uniformly from `[0, 2^bits)`.
    pub fn random_bits(bits: u64, rng: &mut impl CryptoRngCore) -> Bn {
        let len = bits.div_ceil(8);
        let mut bytes = vec![0u8; len as usize];
        rng.fill_bytes(&mut bytes);
        if let Some(top) = bytes.first_mut() {
            *top &= 0xff >> (len * 8 - bits);
        }
        Bn::from_bytes_be(&bytes)
    }

    /// Samples uniformly among the integers of exactly `bits` bits, i.e.
    /// from `[2^(bits-1), 2^bits)`. Zero bits yields zero.
    pub fn random_exact_bits(bits: u64, rng: &mut impl CryptoRngCore) -> Bn {
        if bits == 0 {
            return Bn::zero();
        }
        let mut n = Self::random_bits(bits, rng);
        if !n.is_bit_set(bits - 1) {
            n.0 += BigInt::one() << (bits - 1);
        }
        n
    }

    /// Samples uniformly from `[0, self)` by rejection.
    ///
    /// Fails with [`Error::Domain`] unless `self` is positive.
    pub fn random_below(&self, rng: &mut impl CryptoRngCore) -> Result<Bn> {
        if !self.is_positive() {
            return Err(Error::Domain);
        }
        let bits = self.num_bits();
        loop {
            let candidate = Self::random_bits(bits, rng);
            if candidate < *self {
                return Ok(candidate);
            }
        }
    }
}

#[cfg(feature = "getrandom")]
impl Bn {
    /// Samples uniformly from `[0, self)` using the operating system's
    /// random source.
    pub fn random(&self) -> Result<Bn> {
        self.random_below(&mut OsRng)
    }

    /// Samples uniformly from `[0, 2^bits)` using the operating system's
    /// random source.
    pub fn get_random(bits: u64) -> Bn {
        Self::random_bits(bits, &mut OsRng)
    }

    /// Generates a random prime of exactly `bits` bits, a safe prime when
    /// `safe` is set.
    pub fn get_prime(bits: u64, safe: bool) -> Result<Bn> {
        if safe {
            Self::random_safe_prime(bits, &mut OsRng)
        } else {
            Self::random_prime(bits, &mut OsRng)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Bn, Error};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn bit_lengths() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for bits in [0u64, 1, 7, 8, 9, 255] {
            for _ in 0..16 {
                assert!(Bn::random_bits(bits, &mut rng).num_bits() <= bits);
                assert_eq!(Bn::random_exact_bits(bits, &mut rng).num_bits(), bits);
            }
        }
    }

    #[test]
    fn below_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let n = Bn::from(1000);
        for _ in 0..64 {
            let x = n.random_below(&mut rng).unwrap();
            assert!(!x.is_negative() && x < n);
        }
        assert_eq!(Bn::zero().random_below(&mut rng), Err(Error::Domain));
        assert_eq!(Bn::from(-5).random_below(&mut rng), Err(Error::Domain));
    }

    #[cfg(feature = "getrandom")]
    #[test]
    fn os_random() {
        let n = Bn::from(10);
        assert!(n.random().unwrap() < n);
        assert!(Bn::get_random(10).num_bits() <= 10);
    }
}

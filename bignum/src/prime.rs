//! Primality testing and prime generation.

use crate::{Bn, Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;

const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Witnesses used by [`Bn::is_prime`].
const FIXED_BASES: usize = 20;

/// Random witnesses used when generating primes.
const GENERATION_ROUNDS: usize = 40;

/// Outcome of trial division by the small primes.
enum TrialDivision {
    Prime,
    Composite,
    Unknown,
}

fn trial_division(n: &BigInt) -> TrialDivision {
    if n < &BigInt::from(2) {
        return TrialDivision::Composite;
    }
    for p in SMALL_PRIMES {
        let p = BigInt::from(p);
        if *n == p {
            return TrialDivision::Prime;
        }
        if n.is_multiple_of(&p) {
            return TrialDivision::Composite;
        }
    }
    TrialDivision::Unknown
}

/// Single Miller-Rabin round for odd `n > 3` written as `n - 1 = d * 2^s`.
fn miller_rabin(n: &BigInt, d: &BigInt, s: u64, witness: &BigInt) -> bool {
    let n_minus_one = n - 1u32;
    let mut x = witness.modpow(d, n);
    if x.is_one() || x == n_minus_one {
        return true;
    }
    for _ in 1..s {
        x = x.modpow(&BigInt::from(2u32), n);
        if x == n_minus_one {
            return true;
        }
        if x.is_one() {
            return false;
        }
    }
    false
}

fn decompose(n: &BigInt) -> (BigInt, u64) {
    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    (n_minus_one >> s, s)
}

impl Bn {
    /// Probabilistic primality test: trial division by the primes below 256
    /// followed by Miller-Rabin with the first twenty primes as witnesses.
    ///
    /// The answer is exact below `3.3 * 10^24`. Negative numbers, zero and
    /// one are not prime.
    pub fn is_prime(&self) -> bool {
        match trial_division(&self.0) {
            TrialDivision::Prime => return true,
            TrialDivision::Composite => return false,
            TrialDivision::Unknown => {}
        }
        let (d, s) = decompose(&self.0);
        SMALL_PRIMES[..FIXED_BASES]
            .iter()
            .all(|&a| miller_rabin(&self.0, &d, s, &BigInt::from(a)))
    }

    /// Miller-Rabin with base 2 and `rounds` witnesses drawn uniformly from
    /// `[2, self - 2]`. A composite passes with probability below
    /// `4^-rounds`.
    pub fn is_probable_prime(&self, rounds: usize, rng: &mut impl CryptoRngCore) -> bool {
        match trial_division(&self.0) {
            TrialDivision::Prime => return true,
            TrialDivision::Composite => return false,
            TrialDivision::Unknown => {}
        }
        let (d, s) = decompose(&self.0);
        if !miller_rabin(&self.0, &d, s, &BigInt::from(2u32)) {
            return false;
        }

        // witnesses are sampled from [0, n - 3) and shifted by 2
        let span = Bn(&self.0 - 3u32);
        (0..rounds).all(|_| match span.random_below(rng) {
            Ok(w) => miller_rabin(&self.0, &d, s, &(w.0 + 2u32)),
            Err(_) => false,
        })
    }

    /// Generates a random prime of exactly `bits` bits.
    ///
    /// Fails with [`Error::Domain`] for fewer than two bits.
    pub fn random_prime(bits: u64, rng: &mut impl CryptoRngCore) -> Result<Bn> {
        if bits < 2 {
            return Err(Error::Domain);
        }
        loop {
            let mut candidate = Self::random_exact_bits(bits, rng);
            if candidate.is_even() {
                candidate.0 += 1u32;
            }
            if candidate.is_probable_prime(GENERATION_ROUNDS, rng) {
                return Ok(candidate);
            }
        }
    }

    /// Generates a random safe prime `p = 2q + 1` with `q` prime and `p` of
    /// exactly `bits` bits.
    ///
    /// Fails with [`Error::Domain`] for fewer than three bits.
    pub fn random_safe_prime(bits: u64, rng: &mut impl CryptoRngCore) -> Result<Bn> {
        if bits < 3 {
            return Err(Error::Domain);
        }
        loop {
            let mut q = Self::random_exact_bits(bits - 1, rng);
            if q.is_even() {
                q.0 += 1u32;
            }
            let p = Bn((&q.0 << 1u32) + 1u32);

            // cheap sieve on p before the expensive tests on q
            if matches!(trial_division(&p.0), TrialDivision::Composite) {
                continue;
            }
            if q.is_probable_prime(GENERATION_ROUNDS, rng)
                && p.is_probable_prime(GENERATION_ROUNDS, rng)
            {
                return Ok(p);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Bn;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn small_numbers() {
        let primes: Vec<i64> = (-5..60).filter(|&n| Bn::from(n).is_prime()).collect();
        assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]);
    }

    #[test]
    fn carmichael_numbers_are_composite() {
        for n in [561i64, 1105, 1729, 2465, 2821, 6601, 8911, 3_215_031_751] {
            assert!(!Bn::from(n).is_prime(), "{n}");
        }
    }

    #[test]
    fn mersenne_primes() {
        let m127 = Bn::from_hex("7fffffffffffffffffffffffffffffff").unwrap();
        assert!(m127.is_prime());
        let m128 = &m127 * 2 + 1;
        assert!(!m128.is_prime());
    }

    #[test]
    fn generation() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let p = Bn::random_prime(96, &mut rng).unwrap();
        assert_eq!(p.num_bits(), 96);
        assert!(p.is_prime());

        let p = Bn::random_safe_prime(48, &mut rng).unwrap();
        assert_eq!(p.num_bits(), 48);
        assert!(p.is_prime());
        assert!(((&p - 1) / 2).is_prime());

        assert!(Bn::random_prime(1, &mut rng).is_err());
        assert!(Bn::random_safe_prime(2, &mut rng).is_err());
    }
}

//! Windowed scalar multiplication.
//!
//! The same machinery drives point multiplication in G1/G2 and
//! exponentiation in GT, through the [`WindowGroup`] abstraction.

use crate::{Bn, params::params};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Number of tables in a [`BasepointTable`]: one per pair of radix-16
/// digits of a 256-bit scalar, plus the carry digit.
const BASEPOINT_TABLES: usize = 33;

/// Internal constant for the number of entries in a [`LookupTable`].
const LUT_SIZE: usize = 8;

/// Group operations used by the windowed ladders. Written additively; GT
/// maps `combine` to multiplication and `inverse` to conjugation.
pub(crate) trait WindowGroup: Copy + ConditionallySelectable {
    fn identity() -> Self;
    fn combine(&self, other: &Self) -> Self;
    fn inverse(&self) -> Self;
    fn double(&self) -> Self;
}

/// Reduces `k` modulo the group order `r` and returns it as 32 big-endian
/// bytes. Negative scalars map to `r - |k| mod r`.
pub(crate) fn reduce_scalar(k: &Bn) -> [u8; 32] {
    let reduced = k.modulo(params().order()).expect("group order is non-zero");
    let bytes = reduced
        .to_bytes_be_padded(32)
        .expect("reduced scalar is below 2^255");
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    out
}

/// Signed radix-16 digits in `[-8, 8)` of a big-endian 256-bit scalar.
fn to_radix_16(bytes: &[u8; 32]) -> [i8; 65] {
    // `x` can have up to 256 bits, so we need an additional byte to store the carry.
    let mut output = [0i8; 65];

    // Step 1: change radix.
    // Convert from radix 256 (bytes) to radix 16 (nibbles)
    for i in 0..32 {
        output[2 * i] = (bytes[31 - i] & 0xf) as i8;
        output[2 * i + 1] = ((bytes[31 - i] >> 4) & 0xf) as i8;
    }

    // Step 2: recenter coefficients from [0,16) to [-8,8)
    for i in 0..64 {
        let carry = (output[i] + 8) >> 4;
        output[i] -= carry << 4;
        output[i + 1] += carry;
    }

    output
}

/// Lookup table containing precomputed values `[p, 2p, 3p, ..., 8p]`
#[derive(Clone, Copy, Debug)]
pub(crate) struct LookupTable<G> {
    points: [G; LUT_SIZE],
}

impl<G: WindowGroup> LookupTable<G> {
    /// Compute a new lookup table from the given element.
    pub(crate) fn new(p: G) -> Self {
        let mut points = [p; LUT_SIZE];

        for j in 0..(LUT_SIZE - 1) {
            points[j + 1] = p.combine(&points[j]);
        }

        Self { points }
    }

    /// Given -8 <= x <= 8, returns x * p in constant time.
    pub(crate) fn select(&self, x: i8) -> G {
        debug_assert!((-8..=8).contains(&x));

        // Compute xabs = |x|
        let xmask = x >> 7;
        let xabs = (x + xmask) ^ xmask;

        // Get an array element in constant time
        let mut t = G::identity();

        for j in 1..(LUT_SIZE + 1) {
            let c = (xabs as u8).ct_eq(&(j as u8));
            t.conditional_assign(&self.points[j - 1], c);
        }
        // Now t == |x| * p.

        let neg_mask = Choice::from((xmask & 1) as u8);
        t.conditional_assign(&t.inverse(), neg_mask);
        // Now t == x * p.

        t
    }
}

/// Constant-time `[k] x` for a reduced scalar.
pub(crate) fn mul_windowed<G: WindowGroup>(x: &G, k: &[u8; 32]) -> G {
    let scalar_digits = to_radix_16(k);
    let lookup_table = LookupTable::new(*x);
    let mut acc = lookup_table.select(scalar_digits[64]);
    for i in (0..64).rev() {
        for _j in 0..4 {
            acc = acc.double();
        }
        acc = acc.combine(&lookup_table.select(scalar_digits[i]));
    }
    acc
}

/// Precomputed multiples of a fixed base, with tables spaced by two radix
/// steps.
#[derive(Debug)]
pub struct BasepointTable<G> {
    tables: Vec<LookupTable<G>>,
}

impl<G: WindowGroup> BasepointTable<G> {
    pub(crate) fn new(base: G) -> Self {
        let mut base = base;
        let mut tables = Vec::with_capacity(BASEPOINT_TABLES);
        for _ in 0..BASEPOINT_TABLES {
            tables.push(LookupTable::new(base));
            for _ in 0..8 {
                base = base.double();
            }
        }
        Self { tables }
    }

    /// Constant-time `[k] base`.
    pub(crate) fn mul(&self, k: &[u8; 32]) -> G {
        let digits = to_radix_16(k);
        let mut acc = self.tables[32].select(digits[64]);
        let mut acc2 = G::identity();
        for i in (0..32).rev() {
            acc2 = acc2.combine(&self.tables[i].select(digits[i * 2 + 1]));
            acc = acc.combine(&self.tables[i].select(digits[i * 2]));
        }
        for _ in 0..4 {
            acc2 = acc2.double();
        }
        acc.combine(&acc2)
    }
}

/// `[k] x` for a public scalar given as little-endian words.
///
/// **This operation is variable time with respect to the scalar.**
pub(crate) fn mul_vartime<G: WindowGroup>(x: &G, words: &[u64]) -> G {
    let mut acc = G::identity();
    for word in words.iter().rev() {
        for i in (0..64).rev() {
            acc = acc.double();
            if (word >> i) & 1 == 1 {
                acc = acc.combine(x);
            }
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::{reduce_scalar, to_radix_16};
    use crate::{Bn, params::params};

    #[test]
    fn radix_16_recomposes() {
        let k = Bn::from_hex("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000000").unwrap();
        let digits = to_radix_16(&reduce_scalar(&k));
        let recomposed = digits
            .iter()
            .rev()
            .fold(Bn::zero(), |acc, d| acc * 16 + i64::from(*d));
        assert_eq!(recomposed, k);
        assert!(digits.iter().all(|d| (-8..=8).contains(d)));
    }

    #[test]
    fn negative_scalars_wrap() {
        let order = params().order();
        assert_eq!(reduce_scalar(&Bn::from(-1)), reduce_scalar(&(order - 1)));
        assert_eq!(reduce_scalar(order), [0u8; 32]);
    }
}

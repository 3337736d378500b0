//! Field and curve arithmetic.
//!
//! The tower is `Fp2 = Fp[u]/(u^2 + 1)`, `Fp6 = Fp2[v]/(v^3 - (u + 1))` and
//! `Fp12 = Fp6[w]/(w^2 - v)`. G1 is defined over `Fp`, G2 over `Fp2` and GT
//! is the order `r` subgroup of `Fp12*`.

pub mod affine;
pub mod fp;
pub mod fp12;
pub mod fp2;
pub mod fp6;
pub(crate) mod mul;
mod point_arithmetic;
pub mod projective;

use crate::{
    Bn,
    arithmetic::{mul::BasepointTable, projective::ProjectivePoint},
    hash2curve::Svdw,
};
use core::fmt::Debug;
use elliptic_curve::{ff::Field, hash2curve::FromOkm};
use subtle::{Choice, CtOption};

/// Field over which curve points are defined: [`Fp`](fp::Fp) for G1 and
/// [`Fp2`](fp2::Fp2) for G2.
pub trait CoordinateField: Field + FromOkm {
    /// Length of the big-endian encoding.
    const ENCODED_LEN: usize;

    /// Writes the canonical big-endian encoding into `out`, which must be
    /// exactly [`Self::ENCODED_LEN`] bytes long.
    fn write_be_bytes(&self, out: &mut [u8]);

    /// Decodes a canonical big-endian encoding. Fails when a component is not
    /// fully reduced or the length is wrong.
    fn read_be_bytes(bytes: &[u8]) -> CtOption<Self>;

    /// Sign of the element as defined by RFC 9380 `sgn0`.
    fn sgn0(&self) -> Choice;

    /// Is the element a square?
    fn is_square(&self) -> Choice;
}

/// Parameters of a short Weierstrass curve `y^2 = x^3 + b` whose prime order
/// subgroup has order `r`.
pub trait CurveParams: Copy + Clone + Debug + Default + Eq + Send + Sync + 'static {
    /// Base field element type.
    type FieldElement: CoordinateField;

    /// Human readable group name.
    const NAME: &'static str;

    /// Coefficient `b` in the curve equation.
    const EQUATION_B: Self::FieldElement;

    /// `3 * b`, used by the complete addition formulas.
    const EQUATION_B3: Self::FieldElement;

    /// Generator point's affine coordinates: (x, y).
    const GENERATOR: (Self::FieldElement, Self::FieldElement);

    /// Domain separation tag for hashing to this group.
    const HASH_DST: &'static [u8];

    /// Shallue-van de Woestijne constants for this curve.
    fn svdw() -> &'static Svdw<Self::FieldElement>;

    /// Maps a point of the curve into the prime order subgroup.
    fn clear_cofactor(point: &ProjectivePoint<Self>) -> ProjectivePoint<Self>;

    /// Fixed-base table for the generator, built on first use.
    fn basepoint_table() -> &'static BasepointTable<ProjectivePoint<Self>>;
}

/// `ff::Field::sqrt_ratio` for fields with a cheap `sqrt`. `nonresidue` is a
/// fixed non-square used when `num / div` is not a square.
pub(crate) fn sqrt_ratio<F: CoordinateField>(num: &F, div: &F, nonresidue: &F) -> (Choice, F) {
    let ratio = *num * div.invert().unwrap_or(F::ZERO);
    let root = ratio.sqrt();
    let twisted = (ratio * nonresidue).sqrt();
    let result = F::conditional_select(
        &twisted.unwrap_or(F::ZERO),
        &root.unwrap_or(F::ZERO),
        root.is_some(),
    );
    (root.is_some() & !div.is_zero(), result)
}

/// Little-endian 64-bit words of the magnitude of `n`.
pub(crate) fn bn_to_words(n: &Bn) -> Vec<u64> {
    let bytes = n.abs().to_bytes_be().unwrap_or_default();
    bytes
        .rchunks(8)
        .map(|chunk| {
            let mut word = [0u8; 8];
            word[8 - chunk.len()..].copy_from_slice(chunk);
            u64::from_be_bytes(word)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::bn_to_words;
    use crate::Bn;

    #[test]
    fn words_are_little_endian() {
        assert!(bn_to_words(&Bn::zero()).is_empty());
        assert_eq!(bn_to_words(&Bn::from(0x0102u64)), vec![0x0102]);
        let n = Bn::from_hex("10000000000000002").unwrap();
        assert_eq!(bn_to_words(&n), vec![2, 1]);
        assert_eq!(bn_to_words(&Bn::from(-5)), vec![5]);
    }
}

//! The group G1: points of `y^2 = x^3 + 4` over `Fp`.

use crate::{
    arithmetic::{
        CurveParams, affine::AffinePoint, fp::Fp, mul::BasepointTable,
        projective::ProjectivePoint,
    },
    hash2curve::Svdw,
    params::params,
};
use std::sync::LazyLock;

/// G1 point in affine coordinates.
pub type G1Affine = AffinePoint<G1Params>;

/// G1 point in projective coordinates.
pub type G1Projective = ProjectivePoint<G1Params>;

static BASEPOINT_TABLE: LazyLock<BasepointTable<G1Projective>> =
    LazyLock::new(|| BasepointTable::new(G1Projective::GENERATOR));

/// Curve parameters of G1.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G1Params;

impl CurveParams for G1Params {
    type FieldElement = Fp;

    const NAME: &'static str = "G1";

    const EQUATION_B: Fp = Fp::from_u64(4);

    const EQUATION_B3: Fp = Fp::from_u64(12);

    const GENERATOR: (Fp, Fp) = (
        Fp::from_be_hex("17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"),
        Fp::from_be_hex("08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1"),
    );

    const HASH_DST: &'static [u8] = b"BLS12381G1_XMD:SHA-256_SVDW_RO_";

    fn svdw() -> &'static Svdw<Fp> {
        &params().svdw_g1
    }

    /// Multiplies by `1 - x`, which maps every curve point into G1.
    fn clear_cofactor(point: &G1Projective) -> G1Projective {
        point.mul_by_words_vartime(&params().g1_cofactor_words)
    }

    fn basepoint_table() -> &'static BasepointTable<G1Projective> {
        &BASEPOINT_TABLE
    }
}

#[cfg(test)]
mod tests {
    use super::{G1Affine, G1Projective};
    use crate::{Bn, Error, arithmetic::fp::Fp};
    use hex_literal::hex;

    #[test]
    fn generator_is_valid() {
        let g = G1Affine::GENERATOR;
        assert!(bool::from(g.is_on_curve()));
        assert!(bool::from(g.is_valid()));
        assert!(bool::from(G1Projective::GENERATOR.is_valid()));
        assert!(bool::from(G1Projective::IDENTITY.is_valid()));
    }

    #[test]
    fn compressed_generator() {
        let bytes = G1Projective::generator().to_bytes(true);
        assert_eq!(
            bytes,
            hex!("0317f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb")
        );
        assert_eq!(G1Projective::from_bytes(&bytes).unwrap(), G1Projective::generator());
        assert_eq!(G1Projective::generator().to_bytes(false).len(), 97);
    }

    #[test]
    fn order_annihilates_generator() {
        let g = G1Projective::generator();
        assert_eq!(g * &G1Projective::order(), G1Projective::identity());
        assert_eq!(g.mul_vartime(&G1Projective::order()), G1Projective::identity());
        assert_eq!(G1Projective::mul_by_generator(&G1Projective::order()), G1Projective::identity());
    }

    #[test]
    fn hash_to_point() {
        let foo = G1Projective::hash_to_point(b"foo");
        let bar = G1Projective::hash_to_point(b"bar");
        assert_ne!(foo, bar);
        assert!(bool::from(foo.is_valid()));
        assert!(bool::from(bar.is_valid()));
        assert_eq!(
            foo.to_bytes(true),
            hex!("031937746968ec7812227f7fb6bcde7c724aeb0662268fc3e6f315ca0ef8f6627a23101c2a408a0484971dceb9cf0381e0")
        );
        assert_eq!(
            bar.to_bytes(true),
            hex!("0217af34ec9d4bef2b2054fbc5328a5c44369d04b7b5d231b5670606f106542bc08a2c5418841de67317a5f2fb0edfa89f")
        );
    }

    #[test]
    fn rejects_points_outside_the_subgroup() {
        // (0, 2) is a point of order 3 on the curve
        let point = G1Affine::from_coordinates(Fp::ZERO, Fp::from_u64(2)).unwrap();
        assert!(!bool::from(point.is_torsion_free()));

        let mut bytes = vec![0x04];
        bytes.extend_from_slice(&Fp::ZERO.to_bytes());
        bytes.extend_from_slice(&Fp::from_u64(2).to_bytes());
        assert_eq!(G1Affine::from_bytes(&bytes), Err(Error::Validation));
    }

    #[test]
    fn affine_coordinates() {
        assert_eq!(
            G1Projective::identity().affine_coordinates(),
            Err(Error::NoAffineCoordinate)
        );
        let (x, y) = (G1Projective::generator() * &Bn::from(2)).affine_coordinates().unwrap();
        assert_eq!(G1Affine::from_coordinates(x, y).unwrap(), G1Projective::generator().double().to_affine());
    }
}

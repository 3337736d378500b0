//! The group G2: points of the sextic twist `y^2 = x^3 + 4(u + 1)` over
//! `Fp2`.

use crate::{
    arithmetic::{
        CurveParams, affine::AffinePoint, fp::Fp, fp2::Fp2, mul::BasepointTable,
        projective::ProjectivePoint,
    },
    hash2curve::Svdw,
    params::params,
};
use std::sync::LazyLock;

/// G2 point in affine coordinates.
pub type G2Affine = AffinePoint<G2Params>;

/// G2 point in projective coordinates.
pub type G2Projective = ProjectivePoint<G2Params>;

static BASEPOINT_TABLE: LazyLock<BasepointTable<G2Projective>> =
    LazyLock::new(|| BasepointTable::new(G2Projective::GENERATOR));

/// Curve parameters of G2.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G2Params;

impl CurveParams for G2Params {
    type FieldElement = Fp2;

    const NAME: &'static str = "G2";

    const EQUATION_B: Fp2 = Fp2::new(Fp::from_u64(4), Fp::from_u64(4));

    const EQUATION_B3: Fp2 = Fp2::new(Fp::from_u64(12), Fp::from_u64(12));

    const GENERATOR: (Fp2, Fp2) = (
        Fp2::new(
            Fp::from_be_hex("024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8"),
            Fp::from_be_hex("13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e"),
        ),
        Fp2::new(
            Fp::from_be_hex("0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801"),
            Fp::from_be_hex("0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be"),
        ),
    );

    const HASH_DST: &'static [u8] = b"BLS12381G2_XMD:SHA-256_SVDW_RO_";

    fn svdw() -> &'static Svdw<Fp2> {
        &params().svdw_g2
    }

    /// Multiplies by the full cofactor of the twist.
    fn clear_cofactor(point: &G2Projective) -> G2Projective {
        point.mul_by_words_vartime(&params().g2_cofactor_words)
    }

    fn basepoint_table() -> &'static BasepointTable<G2Projective> {
        &BASEPOINT_TABLE
    }
}

#[cfg(test)]
mod tests {
    use super::{G2Affine, G2Projective};
    use crate::{
        Bn, Error,
        arithmetic::{fp::Fp, fp2::Fp2},
    };
    use subtle::Choice;
    use hex_literal::hex;

    #[test]
    fn generator_is_valid() {
        assert!(bool::from(G2Affine::GENERATOR.is_valid()));
        assert!(bool::from(G2Projective::IDENTITY.is_valid()));
    }

    #[test]
    fn generator_encodings() {
        let g = G2Projective::generator();
        let compressed = g.to_bytes(true);
        assert_eq!(compressed.len(), 97);
        assert_eq!(compressed[0], 0x03);
        assert_eq!(
            compressed[1..49],
            hex!("024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8")
        );
        assert_eq!(G2Projective::from_bytes(&compressed).unwrap(), g);

        let uncompressed = g.to_bytes(false);
        assert_eq!(uncompressed.len(), 193);
        assert_eq!(G2Projective::from_bytes(&uncompressed).unwrap(), g);
    }

    #[test]
    fn order_annihilates_generator() {
        let order = G2Projective::order();
        assert_eq!(G2Projective::generator() * &order, G2Projective::identity());
        assert_eq!(G2Projective::mul_by_generator(&order), G2Projective::identity());
    }

    #[test]
    fn hash_to_point() {
        let foo = G2Projective::hash_to_point(b"foo");
        let bar = G2Projective::hash_to_point(b"bar");
        assert_ne!(foo, bar);
        assert!(bool::from(foo.is_valid()));
        assert_eq!(
            foo.to_bytes(true),
            hex!("0218a4b7e32a6fb302a1a2c294f0f76bac275081d50361745a1bc6a2b2c0f695fbe8e4679646e3c530642f51ac8ba35c73078286c2885316ff8f3f4ee50bfec22fd188dc473bc6d6bb775d31851a4c5aa0b8088d8a0cb1c594bb3429ba6fe39fa0")
        );
        assert_eq!(
            bar.to_bytes(true),
            hex!("030a29f9660136d6f69913b609fda24a054879495d95f830b7055c4c33a515d093686032d1c4f20fd25866867bdf2ee3080181cd43a38b0776c8255656f7d713c2da94b9a8cae9a6d87aad5d91c9ebacabc8d9d9d35d6d13f523775f657f819604")
        );
    }

    #[test]
    fn scalar_mul_agrees_with_addition() {
        let g = G2Projective::generator();
        assert_eq!(g * &Bn::from(3), g + g + g);
        assert_eq!(g * &Bn::from(-1), -g);
        assert_eq!(G2Projective::mul_by_generator(&Bn::from(5)), g * &Bn::from(5));
    }

    #[test]
    fn rejects_bad_lengths() {
        let mut bytes = G2Projective::generator().to_bytes(true);
        bytes.pop();
        assert_eq!(G2Affine::from_bytes(&bytes), Err(Error::Format));
        assert_eq!(G2Affine::from_bytes(&[]), Err(Error::Format));
        assert_eq!(G2Affine::from_bytes(&[0x00, 0x00]), Err(Error::Format));
    }

    #[test]
    fn rejects_points_outside_the_subgroup() {
        let point = (1..)
            .map(|i| Fp2 { c0: Fp::from_u64(i), c1: Fp::ONE })
            .find_map(|x| Option::<G2Affine>::from(G2Affine::decompress(&x, Choice::from(0))))
            .expect("some small x is on the twist");
        assert!(bool::from(point.is_on_curve()));
        assert!(!bool::from(point.is_torsion_free()));

        for compressed in [true, false] {
            let bytes = point.to_bytes(compressed);
            assert_eq!(G2Affine::from_bytes(&bytes), Err(Error::Validation));
            assert_eq!(G2Projective::from_bytes(&bytes), Err(Error::Validation));
        }
    }
}

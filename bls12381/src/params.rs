//! Process-wide curve parameters, computed once on first use.

use crate::{
    Bn,
    arithmetic::{bn_to_words, fp::Fp, fp2::Fp2},
    hash2curve::Svdw,
};
use elliptic_curve::ff::Field;
use std::sync::LazyLock;

/// BLS parameter `x`, which is negative for BLS12-381.
pub(crate) const BLS_X: u64 = 0xd201_0000_0001_0000;

/// `x` is negative.
pub(crate) const BLS_X_IS_NEG: bool = true;

const ORDER_HEX: &str = "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";

static PARAMS: LazyLock<Params> = LazyLock::new(Params::compute);

/// Constants derived from the curve definition.
///
/// They are computed exactly once per process and are read-only afterwards.
#[derive(Debug)]
pub struct Params {
    modulus: Bn,
    order: Bn,
    g1_cofactor: Bn,
    g2_cofactor: Bn,
    /// `(u + 1)^(i (p - 1) / 6)` for `i` in `0..6`.
    pub(crate) frobenius: [Fp2; 6],
    /// `(p^4 - p^2 + 1) / r` as little-endian words.
    pub(crate) final_exponent: Vec<u64>,
    pub(crate) g1_cofactor_words: Vec<u64>,
    pub(crate) g2_cofactor_words: Vec<u64>,
    pub(crate) order_words: Vec<u64>,
    pub(crate) svdw_g1: Svdw<Fp>,
    pub(crate) svdw_g2: Svdw<Fp2>,
}

impl Params {
    fn compute() -> Self {
        let modulus = Fp::modulus();
        let order = Bn::from_hex(ORDER_HEX).expect("valid order constant");
        let x = -Bn::from(BLS_X);

        let gamma = Fp2::NONRESIDUE.pow_vartime(bn_to_words(&((&modulus - 1) / 6)));
        let mut frobenius = [Fp2::ONE; 6];
        for i in 1..6 {
            frobenius[i] = frobenius[i - 1] * gamma;
        }

        let p2 = modulus.square();
        let final_exponent = (p2.square() - &p2 + 1) / &order;

        // Effective cofactor for G1 is 1 - x
        let g1_cofactor = Bn::one() - &x;

        // (x^8 - 4x^7 + 5x^6 - 4x^4 + 6x^3 - 4x^2 - 4x + 13) / 9
        let powers: Vec<Bn> = core::iter::successors(Some(Bn::one()), |prev| Some(prev * &x))
            .take(9)
            .collect();
        let g2_cofactor = (&powers[8] - &powers[7] * 4 + &powers[6] * 5 - &powers[4] * 4
            + &powers[3] * 6
            - &powers[2] * 4
            - &powers[1] * 4
            + 13)
            / 9;

        let params = Self {
            final_exponent: bn_to_words(&final_exponent),
            g1_cofactor_words: bn_to_words(&g1_cofactor),
            g2_cofactor_words: bn_to_words(&g2_cofactor),
            order_words: bn_to_words(&order),
            svdw_g1: Svdw::new(-Fp::from_u64(3), Fp::from_u64(4)),
            svdw_g2: Svdw::new(-Fp2::ONE, Fp2::new(Fp::from_u64(4), Fp::from_u64(4))),
            modulus,
            order,
            g1_cofactor,
            g2_cofactor,
            frobenius,
        };
        log::debug!(
            "computed BLS12-381 parameters: {}-bit final exponent, {}-bit G2 cofactor",
            final_exponent.num_bits(),
            params.g2_cofactor.num_bits()
        );
        params
    }

    /// Base field modulus `p`.
    pub fn modulus(&self) -> &Bn {
        &self.modulus
    }

    /// Prime order `r` of G1, G2 and GT.
    pub fn order(&self) -> &Bn {
        &self.order
    }

    /// Scalar clearing the G1 cofactor (`1 - x`).
    pub fn g1_cofactor(&self) -> &Bn {
        &self.g1_cofactor
    }

    /// Scalar clearing the G2 cofactor.
    pub fn g2_cofactor(&self) -> &Bn {
        &self.g2_cofactor
    }
}

/// Shared parameters, computed on first access.
pub fn params() -> &'static Params {
    &PARAMS
}

/// Forces one-time initialization of every process-wide table: curve
/// parameters, fixed-base tables and the GT generator.
///
/// Calling it is optional and idempotent. Applications that want to keep the
/// first cryptographic operation fast may call it at start-up.
pub fn init() -> &'static Params {
    let params = params();
    crate::g1::G1Projective::basepoint_table();
    crate::g2::G2Projective::basepoint_table();
    crate::gt::Gt::generator();
    params
}

#[cfg(test)]
mod tests {
    use super::{init, params};
    use crate::{Bn, Fp2, arithmetic::fp::Fp};
    use elliptic_curve::ff::Field;

    #[test]
    fn init_is_idempotent() {
        let first = init();
        let second = init();
        assert!(core::ptr::eq(first, second));
        assert!(core::ptr::eq(first, params()));
    }

    #[test]
    fn cofactors() {
        let params = params();
        assert_eq!(params.g1_cofactor(), &Bn::from_hex("d201000000010001").unwrap());
        assert_eq!(
            params.g2_cofactor(),
            &Bn::from_hex("5d543a95414e7f1091d50792876a202cd91de4547085abaa68a205b2e5a7ddfa628f1cb4d9e82ef21537e293a6691ae1616ec6e786f0c70cf1c38e31c7238e5").unwrap()
        );
        assert_eq!(params.modulus(), &Fp::modulus());
        assert!(params.order().is_prime());
    }

    #[test]
    fn frobenius_coefficients() {
        let params = params();
        assert_eq!(params.frobenius[0], Fp2::ONE);
        // gamma_1^6 = (u + 1)^(p - 1)
        let expected = Fp2::NONRESIDUE.pow_vartime(crate::arithmetic::bn_to_words(&(Fp::modulus() - 1)));
        assert_eq!(params.frobenius[1].pow_vartime([6u64]), expected);
        // gamma_3 is a square root of (u + 1)^(p - 1)
        assert_eq!(params.frobenius[3].square(), expected);
    }
}

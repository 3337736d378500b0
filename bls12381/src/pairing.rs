//! Optimal ate pairing `e: G1 x G2 -> GT`.

use crate::{
    G1Affine, G2Affine, Gt,
    arithmetic::{fp2::Fp2, fp6::Fp6, fp12::Fp12},
    params::{BLS_X, BLS_X_IS_NEG, params},
};
use core::ops::{Mul, MulAssign};

/// Output of the Miller loop, before the final exponentiation.
///
/// Results can be multiplied together so that a product of pairings only
/// pays for one final exponentiation.
#[derive(Copy, Clone, Debug, Default)]
pub struct MillerLoopResult(pub(crate) Fp12);

impl MillerLoopResult {
    /// Maps the Miller loop output into GT by raising it to
    /// `(p^12 - 1) / r`.
    pub fn final_exponentiation(&self) -> Gt {
        let f = self.0;

        // easy part: f^((p^6 - 1)(p^2 + 1))
        let f = f.conjugate() * f.invert().unwrap_or(Fp12::ZERO);
        let f = f.frobenius_map(2) * f;

        // hard part: f^((p^4 - p^2 + 1) / r)
        Gt(f.pow_vartime(&params().final_exponent))
    }
}

impl Mul<&MillerLoopResult> for MillerLoopResult {
    type Output = MillerLoopResult;

    fn mul(self, rhs: &MillerLoopResult) -> MillerLoopResult {
        MillerLoopResult(self.0 * rhs.0)
    }
}

impl Mul<MillerLoopResult> for MillerLoopResult {
    type Output = MillerLoopResult;

    fn mul(self, rhs: MillerLoopResult) -> MillerLoopResult {
        self * &rhs
    }
}

impl MulAssign<&MillerLoopResult> for MillerLoopResult {
    fn mul_assign(&mut self, rhs: &MillerLoopResult) {
        *self = *self * rhs;
    }
}

/// Line through `t` with slope `lambda`, evaluated at `p = (xp, yp)`:
/// `(lambda * xt - yt) - lambda * xp * w^2 + yp * w^3`.
fn line(lambda: &Fp2, t: &(Fp2, Fp2), p: &G1Affine) -> Fp12 {
    let (xt, yt) = t;
    let c0 = Fp6::new(*lambda * xt - yt, -lambda.mul_by_fp(&p.x), Fp2::ZERO);
    let c1 = Fp6::new(Fp2::ZERO, Fp2::from(p.y), Fp2::ZERO);
    Fp12::new(c0, c1)
}

/// Tangent step: returns the line at `t` and `2t`.
fn double_step(t: &(Fp2, Fp2), p: &G1Affine) -> (Fp12, (Fp2, Fp2)) {
    let (xt, yt) = t;
    let xt2 = xt.square();
    let lambda = (xt2.double() + xt2) * yt.double().invert().unwrap_or(Fp2::ZERO);
    let x3 = lambda.square() - xt.double();
    let y3 = lambda * (*xt - x3) - yt;
    (line(&lambda, t, p), (x3, y3))
}

/// Chord step: returns the line through `t` and `q` and `t + q`.
fn add_step(t: &(Fp2, Fp2), q: &(Fp2, Fp2), p: &G1Affine) -> (Fp12, (Fp2, Fp2)) {
    let (xt, yt) = t;
    let (xq, yq) = q;
    let lambda = (*yq - yt) * (*xq - xt).invert().unwrap_or(Fp2::ZERO);
    let x3 = lambda.square() - xt - xq;
    let y3 = lambda * (*xt - x3) - yt;
    (line(&lambda, t, p), (x3, y3))
}

/// Computes the product of the Miller loops of all `(P, Q)` pairs, sharing
/// the squarings of the accumulator. Pairs where either point is the
/// identity contribute `1`.
///
/// Points must be in their prime order subgroups, which holds for every
/// point obtained from this crate's decoders, hashing and arithmetic. Points
/// built with [`AffinePoint::from_coordinates`](crate::AffinePoint::from_coordinates)
/// are only checked against the curve equation; call `is_valid` on them
/// first. Debug builds panic on points outside the subgroups.
pub fn multi_miller_loop(terms: &[(&G1Affine, &G2Affine)]) -> MillerLoopResult {
    debug_assert!(
        terms
            .iter()
            .all(|(p, q)| bool::from(p.is_torsion_free() & q.is_torsion_free())),
        "pairing inputs must lie in the prime order subgroups"
    );

    let terms: Vec<(&G1Affine, (Fp2, Fp2))> = terms
        .iter()
        .filter(|(p, q)| !bool::from(p.is_identity() | q.is_identity()))
        .map(|(p, q)| (*p, (q.x, q.y)))
        .collect();

    let mut f = Fp12::ONE;
    let mut ts: Vec<(Fp2, Fp2)> = terms.iter().map(|(_, q)| *q).collect();

    for i in (0..63).rev() {
        f = f.square();
        for ((p, _), t) in terms.iter().zip(ts.iter_mut()) {
            let (l, doubled) = double_step(t, p);
            f *= l;
            *t = doubled;
        }

        if (BLS_X >> i) & 1 == 1 {
            for ((p, q), t) in terms.iter().zip(ts.iter_mut()) {
                let (l, sum) = add_step(t, q, p);
                f *= l;
                *t = sum;
            }
        }
    }

    if BLS_X_IS_NEG {
        f = f.conjugate();
    }
    MillerLoopResult(f)
}

/// Computes `e(p, q)`. The identity of either group maps to
/// [`Gt::identity`]. Both points must be valid, see [`multi_miller_loop`].
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
    multi_miller_loop(&[(p, q)]).final_exponentiation()
}

#[cfg(test)]
mod tests {
    use super::{multi_miller_loop, pairing};
    use crate::{Bn, G1Affine, G1Projective, G2Affine, G2Projective, Gt, arithmetic::fp::Fp};
    use hex_literal::hex;

    #[test]
    fn regression() {
        let e = pairing(&G1Affine::GENERATOR, &G2Affine::GENERATOR);
        assert_eq!(
            e.0.c0.c0.c0.to_bytes(),
            hex!("11619b45f61edfe3b47a15fac19442526ff489dcda25e59121d9931438907dfd448299a87dde3a649bdba96e84d54558")
        );
    }

    #[test]
    fn identity_inputs() {
        assert_eq!(pairing(&G1Affine::IDENTITY, &G2Affine::GENERATOR), Gt::identity());
        assert_eq!(pairing(&G1Affine::GENERATOR, &G2Affine::IDENTITY), Gt::identity());
    }

    #[test]
    fn product_of_pairings() {
        let a = Bn::from(1234567);
        let p = G1Projective::mul_by_generator(&a).to_affine();
        let minus_g1 = -G1Affine::GENERATOR;
        let aq = G2Projective::mul_by_generator(&a).to_affine();

        // e(aP, Q) * e(-P, aQ) == 1
        let product =
            multi_miller_loop(&[(&p, &G2Affine::GENERATOR), (&minus_g1, &aq)]).final_exponentiation();
        assert_eq!(product, Gt::identity());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "prime order subgroups")]
    fn rejects_points_outside_the_subgroup() {
        // (0, 2) has order 3
        let p = G1Affine::from_coordinates(Fp::ZERO, Fp::from_u64(2)).unwrap();
        pairing(&p, &G2Affine::GENERATOR);
    }
}

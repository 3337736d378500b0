//! Hashing to G1 and G2.
//!
//! Messages are expanded with `expand_message_xmd` over SHA-256 into two
//! field elements, each mapped to the curve with the Shallue-van de
//! Woestijne map (RFC 9380 section 6.6.1). The sum of both points is then
//! mapped into the prime order subgroup by clearing the cofactor.

use crate::arithmetic::{CoordinateField, CurveParams, affine::AffinePoint, projective::ProjectivePoint};
use elliptic_curve::{
    ff::Field,
    hash2curve::{ExpandMsgXmd, hash_to_field},
};
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Constants of the Shallue-van de Woestijne map for `y^2 = x^3 + b`.
#[derive(Clone, Debug)]
pub struct Svdw<F> {
    z: F,
    b: F,
    /// `g(Z)`
    c1: F,
    /// `-Z / 2`
    c2: F,
    /// `sqrt(-g(Z) * 3 * Z^2)` with `sgn0(c3) == 0`
    c3: F,
    /// `-4 * g(Z) / (3 * Z^2)`
    c4: F,
}

impl<F: CoordinateField> Svdw<F> {
    /// Derives the map constants for the curve `y^2 = x^3 + b` and a
    /// suitable `z`.
    pub(crate) fn new(z: F, b: F) -> Self {
        let g_z = z.square() * z + b;
        let three_z2 = z.square().double() + z.square();

        let c2 = -z * F::ONE.double().invert().expect("2 is invertible");
        let c3 = (-g_z * three_z2).sqrt().expect("-g(Z) * 3Z^2 is a square");
        let c3 = F::conditional_select(&c3, &-c3, c3.sgn0());
        let c4 = -g_z.double().double() * three_z2.invert().expect("Z is non-zero");

        Self {
            z,
            b,
            c1: g_z,
            c2,
            c3,
            c4,
        }
    }

    fn g(&self, x: &F) -> F {
        x.square() * x + self.b
    }

    /// Maps a field element to a point on the curve (not necessarily in the
    /// prime order subgroup). Constant time.
    pub(crate) fn map_to_curve(&self, u: &F) -> (F, F) {
        let tv1 = u.square() * self.c1;
        let tv2 = F::ONE + tv1;
        let tv1 = F::ONE - tv1;
        let tv3 = (tv1 * tv2).invert().unwrap_or(F::ZERO);
        let tv4 = *u * tv1 * tv3 * self.c3;

        let x1 = self.c2 - tv4;
        let e1 = self.g(&x1).is_square();
        let x2 = self.c2 + tv4;
        let e2 = self.g(&x2).is_square() & !e1;
        let x3 = (tv2.square() * tv3).square() * self.c4 + self.z;

        let x = F::conditional_select(&x3, &x1, e1);
        let x = F::conditional_select(&x, &x2, e2);

        // one of g(x1), g(x2), g(x3) is always a square
        let y = self.g(&x).sqrt().unwrap_or(F::ZERO);
        let y = F::conditional_select(&-y, &y, u.sgn0().ct_eq(&y.sgn0()));
        (x, y)
    }
}

/// Hashes `msg` to the prime order subgroup of the curve `C`, using
/// [`CurveParams::HASH_DST`] as the domain separation tag.
pub(crate) fn hash_to_curve<C: CurveParams>(msg: &[u8]) -> ProjectivePoint<C> {
    let mut u = [C::FieldElement::ZERO; 2];
    hash_to_field::<ExpandMsgXmd<Sha256>, C::FieldElement>(&[msg], &[C::HASH_DST], &mut u)
        .expect("output length and DST are within the xmd limits");

    let svdw = C::svdw();
    let [q0, q1] = u.map(|u| {
        let (x, y) = svdw.map_to_curve(&u);
        ProjectivePoint::from(AffinePoint::<C> { x, y, infinity: 0 })
    });
    C::clear_cofactor(&(q0 + q1))
}

//! Complete point arithmetic for short Weierstrass curves with `a = 0`.

use super::{CurveParams, affine::AffinePoint, projective::ProjectivePoint};
use elliptic_curve::ff::Field;
use subtle::ConditionallySelectable;

/// Implements complete addition for curves with `a = 0`
///
/// Implements the complete addition formula from [Renes-Costello-Batina 2015]
/// (Algorithm 7). The comments after each line indicate which algorithm steps
/// are being performed.
///
/// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
pub(super) fn add<C: CurveParams>(
    lhs: &ProjectivePoint<C>,
    rhs: &ProjectivePoint<C>,
) -> ProjectivePoint<C> {
    let xx = lhs.x * rhs.x; // 1
    let yy = lhs.y * rhs.y; // 2
    let zz = lhs.z * rhs.z; // 3
    let xy_pairs = ((lhs.x + lhs.y) * (rhs.x + rhs.y)) - (xx + yy); // 4, 5, 6, 7, 8
    let yz_pairs = ((lhs.y + lhs.z) * (rhs.y + rhs.z)) - (yy + zz); // 9, 10, 11, 12, 13
    let xz_pairs = ((lhs.x + lhs.z) * (rhs.x + rhs.z)) - (xx + zz); // 14, 15, 16, 17, 18

    let bzz3 = C::EQUATION_B3 * zz; // 19, 20
    let yy_m_bzz3 = yy - bzz3; // 21
    let yy_p_bzz3 = yy + bzz3; // 22
    let xx3 = xx.double() + xx; // 23, 24
    let bxz3 = C::EQUATION_B3 * xz_pairs; // 25

    ProjectivePoint {
        x: (xy_pairs * yy_m_bzz3) - (yz_pairs * bxz3), // 26, 27, 28, 29
        y: (yy_m_bzz3 * yy_p_bzz3) + (xx3 * bxz3),     // 30, 31, 32
        z: (yz_pairs * yy_p_bzz3) + (xy_pairs * xx3),  // 33, 34, 35
    }
}

/// Implements complete mixed addition for curves with `a = 0`
///
/// Implements the complete mixed addition formula from [Renes-Costello-Batina 2015]
/// (Algorithm 8). The comments after each line indicate which algorithm
/// steps are being performed.
///
/// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
pub(super) fn add_mixed<C: CurveParams>(
    lhs: &ProjectivePoint<C>,
    rhs: &AffinePoint<C>,
) -> ProjectivePoint<C> {
    let xx = lhs.x * rhs.x; // 1
    let yy = lhs.y * rhs.y; // 2
    let xy_pairs = ((lhs.x + lhs.y) * (rhs.x + rhs.y)) - (xx + yy); // 3, 4, 5, 6, 7
    let yz_pairs = (rhs.y * lhs.z) + lhs.y; // 8, 9
    let xz_pairs = (rhs.x * lhs.z) + lhs.x; // 10, 11

    let xx3 = xx.double() + xx; // 12, 13
    let bz3 = C::EQUATION_B3 * lhs.z; // 14
    let yy_p_bz3 = yy + bz3; // 15
    let yy_m_bz3 = yy - bz3; // 16
    let bxz3 = C::EQUATION_B3 * xz_pairs; // 17

    let mut ret = ProjectivePoint {
        x: (xy_pairs * yy_m_bz3) - (yz_pairs * bxz3), // 18, 19, 20
        y: (yy_m_bz3 * yy_p_bz3) + (xx3 * bxz3),     // 21, 22, 23
        z: (yz_pairs * yy_p_bz3) + (xy_pairs * xx3),  // 24, 25, 26
    };
    ret.conditional_assign(lhs, rhs.is_identity());
    ret
}

/// Implements point doubling for curves with `a = 0`
///
/// Implements the exception-free point doubling formula from [Renes-Costello-Batina 2015]
/// (Algorithm 9). The comments after each line indicate which algorithm
/// steps are being performed.
///
/// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
pub(super) fn double<C: CurveParams>(point: &ProjectivePoint<C>) -> ProjectivePoint<C> {
    let yy = point.y.square(); // 1
    let yy8 = yy.double().double().double(); // 2, 3, 4
    let yz = point.y * point.z; // 5
    let bzz3 = C::EQUATION_B3 * point.z.square(); // 6, 7
    let x_frag = bzz3 * yy8; // 8
    let yy_p_bzz3 = yy + bzz3; // 9
    let yy_m_bzz9 = yy - (bzz3.double() + bzz3); // 10, 11, 12
    let y = x_frag + (yy_m_bzz9 * yy_p_bzz3); // 13, 14
    let x = (yy_m_bzz9 * (point.x * point.y)).double(); // 15, 16, 17
    let z = yz * yy8; // 18

    ProjectivePoint { x, y, z }
}

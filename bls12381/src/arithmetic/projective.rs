//! Projective curve points.

#![allow(clippy::op_ref)]

use super::{
    CurveParams,
    affine::AffinePoint,
    mul::{self, BasepointTable, WindowGroup},
    point_arithmetic,
};
use crate::{Bn, Error, Result, hash2curve, params::params};
use core::{
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    iter::Sum,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use elliptic_curve::ff::Field;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

/// Point on a BLS12-381 curve in homogeneous projective coordinates
/// `(X : Y : Z)`, representing `(X / Z, Y / Z)`.
#[derive(Clone, Copy)]
pub struct ProjectivePoint<C: CurveParams> {
    pub(crate) x: C::FieldElement,
    pub(crate) y: C::FieldElement,
    pub(crate) z: C::FieldElement,
}

impl<C> ProjectivePoint<C>
where
    C: CurveParams,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: C::FieldElement::ZERO,
        y: C::FieldElement::ONE,
        z: C::FieldElement::ZERO,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        z: C::FieldElement::ONE,
    };

    /// Returns the standard generator.
    pub fn generator() -> Self {
        Self::GENERATOR
    }

    /// Returns the point at infinity.
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Alias of [`Self::identity`].
    pub fn neutral_element() -> Self {
        Self::IDENTITY
    }

    /// Alias of [`Self::identity`].
    pub fn infinity() -> Self {
        Self::IDENTITY
    }

    /// Prime order `r` of the group.
    pub fn order() -> Bn {
        params().order().clone()
    }

    /// Returns the affine representation of this point.
    pub fn to_affine(&self) -> AffinePoint<C> {
        self.z
            .invert()
            .map(|zinv| AffinePoint {
                x: self.x * &zinv,
                y: self.y * &zinv,
                infinity: 0,
            })
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Does the point satisfy `Y^2 Z = X^3 + b Z^3`?
    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square() * self.z;
        let rhs = self.x.square() * self.x + C::EQUATION_B * self.z.square() * self.z;
        lhs.ct_eq(&rhs) & !(self.is_identity() & self.y.is_zero())
    }

    /// Is the point in the prime order subgroup, i.e. is `[r] P` the
    /// identity?
    pub fn is_torsion_free(&self) -> Choice {
        self.mul_by_words_vartime(&params().order_words).is_identity()
    }

    /// On the curve and in the prime order subgroup.
    pub fn is_valid(&self) -> Choice {
        self.is_on_curve() & self.is_torsion_free()
    }

    /// The affine `(x, y)` coordinates, which the identity does not have.
    pub fn affine_coordinates(&self) -> Result<(C::FieldElement, C::FieldElement)> {
        self.to_affine().affine_coordinates()
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        point_arithmetic::add(self, other)
    }

    /// Returns `self + other`.
    fn add_mixed(&self, other: &AffinePoint<C>) -> Self {
        point_arithmetic::add_mixed(self, other)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        point_arithmetic::double(self)
    }

    /// Returns `[k] self` in constant time. `k` is reduced modulo the group
    /// order, so negative scalars multiply `-self`.
    pub fn mul(&self, k: &Bn) -> Self {
        mul::mul_windowed(self, &mul::reduce_scalar(k))
    }

    /// Returns `[k] G` for the standard generator `G`, using a precomputed
    /// table. Constant time.
    pub fn mul_by_generator(k: &Bn) -> Self {
        C::basepoint_table().mul(&mul::reduce_scalar(k))
    }

    /// Returns `[k] self` for a public scalar.
    ///
    /// **This operation is variable time with respect to the scalar.**
    pub fn mul_vartime(&self, k: &Bn) -> Self {
        let reduced = k.modulo(params().order()).expect("group order is non-zero");
        self.mul_by_words_vartime(&super::bn_to_words(&reduced))
    }

    /// Multiplication by an unreduced little-endian scalar, used for cofactor
    /// clearing and subgroup checks.
    pub(crate) fn mul_by_words_vartime(&self, words: &[u64]) -> Self {
        mul::mul_vartime(self, words)
    }

    pub(crate) fn basepoint_table() -> &'static BasepointTable<Self> {
        C::basepoint_table()
    }

    /// Overwrites `self` with `2 * self`.
    pub fn double_in_place(&mut self) -> &mut Self {
        *self = self.double();
        self
    }

    /// Overwrites `self` with `-self`.
    pub fn negate_in_place(&mut self) -> &mut Self {
        *self = self.neg();
        self
    }

    /// Overwrites `self` with `self + other`.
    pub fn add_in_place(&mut self, other: &Self) -> &mut Self {
        *self = self.add(other);
        self
    }

    /// Overwrites `self` with `self - other`.
    pub fn sub_in_place(&mut self, other: &Self) -> &mut Self {
        *self = self.sub(other);
        self
    }

    /// Overwrites `self` with `[k] self`.
    pub fn mul_in_place(&mut self, k: &Bn) -> &mut Self {
        *self = self.mul(k);
        self
    }

    /// Uniformly random element of the prime order subgroup.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        let k = params()
            .order()
            .random_below(rng)
            .expect("group order is positive");
        Self::mul_by_generator(&k)
    }

    /// Returns `sum(weights[i] * elems[i])`.
    ///
    /// Fails with [`Error::Domain`] when the slices differ in length.
    pub fn wsum(weights: &[Bn], elems: &[Self]) -> Result<Self> {
        if weights.len() != elems.len() {
            return Err(Error::Domain);
        }
        Ok(weights.iter().zip(elems).map(|(k, p)| p.mul(k)).sum())
    }

    /// Hashes an arbitrary message to a point of the prime order subgroup.
    pub fn hash_to_point(msg: &[u8]) -> Self {
        hash2curve::hash_to_curve::<C>(msg)
    }

    /// Encodes the point, see [`AffinePoint::to_bytes`].
    pub fn to_bytes(&self, compressed: bool) -> Vec<u8> {
        self.to_affine().to_bytes(compressed)
    }

    /// Decodes and validates a point, see [`AffinePoint::from_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        AffinePoint::from_bytes(bytes).map(Self::from)
    }
}

impl<C> WindowGroup for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn identity() -> Self {
        Self::IDENTITY
    }

    fn combine(&self, other: &Self) -> Self {
        ProjectivePoint::add(self, other)
    }

    fn inverse(&self) -> Self {
        ProjectivePoint::neg(self)
    }

    fn double(&self) -> Self {
        ProjectivePoint::double(self)
    }
}

impl<C> ConditionallySelectable for ProjectivePoint<C>
where
    C: CurveParams,
{
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            z: C::FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C> ConstantTimeEq for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_affine().ct_eq(&other.to_affine())
    }
}

impl<C> Debug for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.to_affine(), f)
    }
}

impl<C> Default for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C> Eq for ProjectivePoint<C> where C: CurveParams {}

impl<C> PartialEq for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C> Hash for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_affine().hash(state);
    }
}

impl<C> From<AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn from(p: AffinePoint<C>) -> Self {
        let projective = ProjectivePoint {
            x: p.x,
            y: p.y,
            z: C::FieldElement::ONE,
        };
        Self::conditional_select(&projective, &Self::IDENTITY, p.is_identity())
    }
}

impl<C> From<&AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn from(p: &AffinePoint<C>) -> Self {
        Self::from(*p)
    }
}

//
// Arithmetic trait impls
//

impl<C> Add<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(&self, &other)
    }
}

impl<C> Add<&ProjectivePoint<C>> for &ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(self, other)
    }
}

impl<C> Add<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(&self, other)
    }
}

impl<C> AddAssign<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn add_assign(&mut self, rhs: ProjectivePoint<C>) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl<C> AddAssign<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn add_assign(&mut self, rhs: &ProjectivePoint<C>) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl<C> Add<AffinePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add_mixed(&self, &other)
    }
}

impl<C> Add<&AffinePoint<C>> for &ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: &AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add_mixed(self, other)
    }
}

impl<C> Sum for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ProjectivePoint::IDENTITY, |a, b| a + b)
    }
}

impl<'a, C> Sum<&'a ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn sum<I: Iterator<Item = &'a ProjectivePoint<C>>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}

impl<C> Sub<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(&self, &other)
    }
}

impl<C> Sub<&ProjectivePoint<C>> for &ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(self, other)
    }
}

impl<C> Sub<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(&self, other)
    }
}

impl<C> SubAssign<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn sub_assign(&mut self, rhs: ProjectivePoint<C>) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl<C> SubAssign<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn sub_assign(&mut self, rhs: &ProjectivePoint<C>) {
        *self = ProjectivePoint::sub(self, rhs);
    }
}

impl<C> Mul<&Bn> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn mul(self, scalar: &Bn) -> ProjectivePoint<C> {
        ProjectivePoint::mul(&self, scalar)
    }
}

impl<C> Mul<&Bn> for &ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn mul(self, scalar: &Bn) -> ProjectivePoint<C> {
        ProjectivePoint::mul(self, scalar)
    }
}

impl<C> Mul<Bn> for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn mul(self, scalar: Bn) -> ProjectivePoint<C> {
        ProjectivePoint::mul(&self, &scalar)
    }
}

impl<C> MulAssign<&Bn> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn mul_assign(&mut self, scalar: &Bn) {
        *self = ProjectivePoint::mul(self, scalar);
    }
}

impl<C> Neg for ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        ProjectivePoint::neg(&self)
    }
}

impl<C> Neg for &ProjectivePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        ProjectivePoint::neg(self)
    }
}

//
// serde support
//

#[cfg(feature = "serde")]
impl<C> Serialize for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        self.to_affine().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, C> Deserialize<'de> for ProjectivePoint<C>
where
    C: CurveParams,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        AffinePoint::deserialize(deserializer).map(Self::from)
    }
}

//! Affine curve points.

#![allow(clippy::op_ref)]

use super::{CoordinateField, CurveParams, projective::ProjectivePoint};
use crate::{Bn, Error, Result};
use core::{
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    ops::{Mul, Neg},
};
use elliptic_curve::ff::Field;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

/// Tag byte of the identity encoding.
const TAG_IDENTITY: u8 = 0x00;

/// Tag byte of a compressed encoding, or'ed with the sign of `y`.
const TAG_COMPRESSED: u8 = 0x02;

/// Tag byte of an uncompressed encoding.
const TAG_UNCOMPRESSED: u8 = 0x04;

/// Point on a BLS12-381 curve in affine coordinates.
#[derive(Clone, Copy)]
pub struct AffinePoint<C: CurveParams> {
    /// x-coordinate
    pub(crate) x: C::FieldElement,

    /// y-coordinate
    pub(crate) y: C::FieldElement,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    ///
    /// This is a proxy for [`Choice`], but uses `u8` instead to permit `const`
    /// constructors for `IDENTITY` and `GENERATOR`.
    pub(crate) infinity: u8,
}

impl<C> AffinePoint<C>
where
    C: CurveParams,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: C::FieldElement::ZERO,
        y: C::FieldElement::ZERO,
        infinity: 1,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        infinity: 0,
    };

    /// Builds a point from affine coordinates, checking that it lies on the
    /// curve. Subgroup membership is not checked, see [`Self::is_valid`].
    pub fn from_coordinates(x: C::FieldElement, y: C::FieldElement) -> CtOption<Self> {
        let point = Self { x, y, infinity: 0 };
        CtOption::new(point, point.is_on_curve())
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Does the point satisfy `y^2 = x^3 + b`? The identity does.
    pub fn is_on_curve(&self) -> Choice {
        let rhs = curve_equation_rhs::<C>(&self.x);
        self.y.square().ct_eq(&rhs) | self.is_identity()
    }

    /// Is the point in the prime order subgroup?
    pub fn is_torsion_free(&self) -> Choice {
        ProjectivePoint::from(self).is_torsion_free()
    }

    /// On the curve and in the prime order subgroup.
    pub fn is_valid(&self) -> Choice {
        self.is_on_curve() & self.is_torsion_free()
    }

    /// The `(x, y)` coordinates, which the identity does not have.
    pub fn affine_coordinates(&self) -> Result<(C::FieldElement, C::FieldElement)> {
        if bool::from(self.is_identity()) {
            return Err(Error::NoAffineCoordinate);
        }
        Ok((self.x, self.y))
    }

    /// Recovers `y` from `x` and the `sgn0` of `y`.
    pub fn decompress(x: &C::FieldElement, y_sign: Choice) -> CtOption<Self> {
        curve_equation_rhs::<C>(x).sqrt().map(|beta| {
            let y = C::FieldElement::conditional_select(&-beta, &beta, beta.sgn0().ct_eq(&y_sign));
            Self {
                x: *x,
                y,
                infinity: 0,
            }
        })
    }

    /// Encodes the point.
    ///
    /// The identity is the single byte `0x00`. Other points are
    /// `0x02 | sgn0(y) || x` when compressed and `0x04 || x || y` otherwise.
    pub fn to_bytes(&self, compressed: bool) -> Vec<u8> {
        if bool::from(self.is_identity()) {
            return vec![TAG_IDENTITY];
        }

        let len = C::FieldElement::ENCODED_LEN;
        let mut out = vec![0u8; if compressed { 1 + len } else { 1 + 2 * len }];
        self.x.write_be_bytes(&mut out[1..=len]);
        if compressed {
            out[0] = TAG_COMPRESSED | self.y.sgn0().unwrap_u8();
        } else {
            out[0] = TAG_UNCOMPRESSED;
            self.y.write_be_bytes(&mut out[1 + len..]);
        }
        out
    }

    /// Decodes and validates a point produced by [`Self::to_bytes`].
    ///
    /// Fails with [`Error::Format`] on a bad length or tag, and with
    /// [`Error::Validation`] when a coordinate is not reduced, the point is
    /// not on the curve or not in the prime order subgroup.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let point = Self::decode(bytes).inspect_err(|err| {
            log::debug!("rejected {} encoding of {} bytes: {}", C::NAME, bytes.len(), err);
        })?;

        if !bool::from(point.is_torsion_free()) {
            log::debug!("rejected {} point outside the prime order subgroup", C::NAME);
            return Err(Error::Validation);
        }
        Ok(point)
    }

    fn decode(bytes: &[u8]) -> Result<Self> {
        let len = C::FieldElement::ENCODED_LEN;
        let (&tag, body) = bytes.split_first().ok_or(Error::Format)?;

        let point = match tag {
            TAG_IDENTITY if body.is_empty() => return Ok(Self::IDENTITY),
            _ if tag & !1 == TAG_COMPRESSED && body.len() == len => {
                let x = Option::<C::FieldElement>::from(C::FieldElement::read_be_bytes(body))
                    .ok_or(Error::Validation)?;
                Self::decompress(&x, Choice::from(tag & 1))
            }
            TAG_UNCOMPRESSED if body.len() == 2 * len => {
                let x = C::FieldElement::read_be_bytes(&body[..len]);
                let y = C::FieldElement::read_be_bytes(&body[len..]);
                let coordinates = Option::<(C::FieldElement, C::FieldElement)>::from(
                    x.and_then(|x| y.map(|y| (x, y))),
                )
                .ok_or(Error::Validation)?;
                Self::from_coordinates(coordinates.0, coordinates.1)
            }
            _ => return Err(Error::Format),
        };

        Option::from(point).ok_or(Error::Validation)
    }
}

/// `x^3 + b`
fn curve_equation_rhs<C: CurveParams>(x: &C::FieldElement) -> C::FieldElement {
    x.square() * x + C::EQUATION_B
}

impl<C> ConditionallySelectable for AffinePoint<C>
where
    C: CurveParams,
{
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C> ConstantTimeEq for AffinePoint<C>
where
    C: CurveParams,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.infinity.ct_eq(&other.infinity)
    }
}

impl<C> Debug for AffinePoint<C>
where
    C: CurveParams,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x", C::NAME)?;
        for byte in self.to_bytes(true) {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

impl<C> Default for AffinePoint<C>
where
    C: CurveParams,
{
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C> Eq for AffinePoint<C> where C: CurveParams {}

impl<C> PartialEq for AffinePoint<C>
where
    C: CurveParams,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C> Hash for AffinePoint<C>
where
    C: CurveParams,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bytes(true).hash(state);
    }
}

impl<C> From<ProjectivePoint<C>> for AffinePoint<C>
where
    C: CurveParams,
{
    fn from(p: ProjectivePoint<C>) -> AffinePoint<C> {
        p.to_affine()
    }
}

impl<C> From<&ProjectivePoint<C>> for AffinePoint<C>
where
    C: CurveParams,
{
    fn from(p: &ProjectivePoint<C>) -> AffinePoint<C> {
        p.to_affine()
    }
}

impl<C> TryFrom<&[u8]> for AffinePoint<C>
where
    C: CurveParams,
{
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

//
// Arithmetic trait impls
//

impl<C> Mul<&Bn> for AffinePoint<C>
where
    C: CurveParams,
{
    type Output = ProjectivePoint<C>;

    fn mul(self, scalar: &Bn) -> ProjectivePoint<C> {
        ProjectivePoint::<C>::from(self) * scalar
    }
}

impl<C> Neg for AffinePoint<C>
where
    C: CurveParams,
{
    type Output = Self;

    fn neg(self) -> Self {
        AffinePoint {
            x: self.x,
            y: -self.y,
            infinity: self.infinity,
        }
    }
}

impl<C> Neg for &AffinePoint<C>
where
    C: CurveParams,
{
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        -(*self)
    }
}

//
// serde support
//

#[cfg(feature = "serde")]
impl<C> Serialize for AffinePoint<C>
where
    C: CurveParams,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.to_bytes(true), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, C> Deserialize<'de> for AffinePoint<C>
where
    C: CurveParams,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let bytes = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        Self::from_bytes(&bytes).map_err(de::Error::custom)
    }
}

//! The target group GT: the order `r` subgroup of `Fp12*`, written
//! multiplicatively.

use crate::{
    Bn, Error, G1Affine, G2Affine, Result,
    arithmetic::{
        fp12::Fp12,
        mul::{self, WindowGroup},
    },
    pairing::pairing,
    params::params,
};
use core::{
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    iter::Product,
    ops::{Div, DivAssign, Mul, MulAssign},
};
use rand_core::CryptoRngCore;
use std::sync::LazyLock;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

static GENERATOR: LazyLock<Gt> = LazyLock::new(|| {
    log::debug!("computing the GT generator");
    pairing(&G1Affine::GENERATOR, &G2Affine::GENERATOR)
});

/// Element of the target group.
#[derive(Clone, Copy)]
pub struct Gt(pub(crate) Fp12);

impl Gt {
    /// Length of the encoding.
    pub const BYTES: usize = Fp12::BYTES;

    /// `e(G1::generator(), G2::generator())`, computed once.
    pub fn generator() -> Self {
        *GENERATOR
    }

    /// The identity element `1`.
    pub fn identity() -> Self {
        Self(Fp12::ONE)
    }

    /// Alias of [`Self::identity`].
    pub fn unity() -> Self {
        Self::identity()
    }

    /// Prime order `r` of the group.
    pub fn order() -> Bn {
        params().order().clone()
    }

    /// Underlying `Fp12` value.
    pub fn as_fp12(&self) -> &Fp12 {
        &self.0
    }

    /// Is this the identity?
    pub fn is_identity(&self) -> Choice {
        self.0.is_one()
    }

    /// Is this a non-zero element with `x^r == 1`?
    pub fn is_valid(&self) -> Choice {
        let in_subgroup = self.0.pow_vartime(&params().order_words).is_one();
        !self.0.is_zero() & in_subgroup
    }

    /// Returns `self * other`.
    pub fn mul(&self, other: &Self) -> Self {
        Self(self.0 * other.0)
    }

    /// Returns `self / other`.
    pub fn div(&self, other: &Self) -> Self {
        self.mul(&other.invert())
    }

    /// Returns `self^-1`, which is the conjugate for elements of GT.
    pub fn invert(&self) -> Self {
        Self(self.0.conjugate())
    }

    /// Returns `self^2`.
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Returns `self^k` in constant time. `k` is reduced modulo the group
    /// order, so negative exponents invert.
    pub fn pow(&self, k: &Bn) -> Self {
        mul::mul_windowed(self, &mul::reduce_scalar(k))
    }

    /// Overwrites `self` with `self^-1`.
    pub fn invert_in_place(&mut self) -> &mut Self {
        *self = self.invert();
        self
    }

    /// Overwrites `self` with `self^2`.
    pub fn square_in_place(&mut self) -> &mut Self {
        *self = self.square();
        self
    }

    /// Overwrites `self` with `self^k`.
    pub fn pow_in_place(&mut self, k: &Bn) -> &mut Self {
        *self = self.pow(k);
        self
    }

    /// Overwrites `self` with `self * other`.
    pub fn mul_in_place(&mut self, other: &Self) -> &mut Self {
        *self = Gt::mul(self, other);
        self
    }

    /// Overwrites `self` with `self / other`.
    pub fn div_in_place(&mut self, other: &Self) -> &mut Self {
        *self = Gt::div(self, other);
        self
    }

    /// Uniformly random element.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        let k = params()
            .order()
            .random_below(rng)
            .expect("group order is positive");
        Self::generator().pow(&k)
    }

    /// Returns `prod(elems[i]^weights[i])`.
    ///
    /// Fails with [`Error::Domain`] when the slices differ in length.
    pub fn wprod(weights: &[Bn], elems: &[Self]) -> Result<Self> {
        if weights.len() != elems.len() {
            return Err(Error::Domain);
        }
        Ok(weights.iter().zip(elems).map(|(k, x)| x.pow(k)).product())
    }

    /// Encodes the twelve `Fp` coefficients, see [`Fp12::to_bytes`].
    pub fn to_bytes(&self) -> [u8; 576] {
        self.0.to_bytes()
    }

    /// Decodes and validates an element.
    ///
    /// Fails with [`Error::Format`] when the input is not 576 bytes long and
    /// with [`Error::Validation`] when a coefficient is not reduced or the
    /// value is not in GT.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes = <&[u8; 576]>::try_from(bytes).map_err(|_| {
            log::debug!("rejected GT encoding of {} bytes", bytes.len());
            Error::Format
        })?;
        let value = Option::<Fp12>::from(Fp12::from_bytes(bytes)).ok_or(Error::Validation)?;

        let element = Self(value);
        if !bool::from(element.is_valid()) {
            log::debug!("rejected GT value outside the order r subgroup");
            return Err(Error::Validation);
        }
        Ok(element)
    }
}

impl WindowGroup for Gt {
    fn identity() -> Self {
        Gt::identity()
    }

    fn combine(&self, other: &Self) -> Self {
        Gt::mul(self, other)
    }

    fn inverse(&self) -> Self {
        Gt::invert(self)
    }

    fn double(&self) -> Self {
        Gt::square(self)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Default for Gt {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Gt {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Gt {}

impl Hash for Gt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state);
    }
}

impl Debug for Gt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Gt(0x")?;
        for byte in self.to_bytes() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

impl TryFrom<&[u8]> for Gt {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

//
// Arithmetic trait impls
//

impl Mul<Gt> for Gt {
    type Output = Gt;

    fn mul(self, other: Gt) -> Gt {
        Gt::mul(&self, &other)
    }
}

impl Mul<&Gt> for Gt {
    type Output = Gt;

    fn mul(self, other: &Gt) -> Gt {
        Gt::mul(&self, other)
    }
}

impl Mul<&Gt> for &Gt {
    type Output = Gt;

    fn mul(self, other: &Gt) -> Gt {
        Gt::mul(self, other)
    }
}

impl MulAssign<Gt> for Gt {
    fn mul_assign(&mut self, rhs: Gt) {
        *self = Gt::mul(self, &rhs);
    }
}

impl MulAssign<&Gt> for Gt {
    fn mul_assign(&mut self, rhs: &Gt) {
        *self = Gt::mul(self, rhs);
    }
}

impl Div<Gt> for Gt {
    type Output = Gt;

    fn div(self, other: Gt) -> Gt {
        Gt::div(&self, &other)
    }
}

impl Div<&Gt> for Gt {
    type Output = Gt;

    fn div(self, other: &Gt) -> Gt {
        Gt::div(&self, other)
    }
}

impl DivAssign<Gt> for Gt {
    fn div_assign(&mut self, rhs: Gt) {
        *self = Gt::div(self, &rhs);
    }
}

impl DivAssign<&Gt> for Gt {
    fn div_assign(&mut self, rhs: &Gt) {
        *self = Gt::div(self, rhs);
    }
}

impl Product for Gt {
    fn product<I: Iterator<Item = Gt>>(iter: I) -> Gt {
        iter.fold(Gt::identity(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Gt> for Gt {
    fn product<I: Iterator<Item = &'a Gt>>(iter: I) -> Gt {
        iter.fold(Gt::identity(), |acc, x| acc * x)
    }
}

//
// serde support
//

#[cfg(feature = "serde")]
impl Serialize for Gt {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.to_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Gt {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let bytes = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        Self::from_bytes(&bytes).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::Gt;
    use crate::{Bn, Error};

    #[test]
    fn generator_has_order_r() {
        let g = Gt::generator();
        assert_ne!(g, Gt::identity());
        assert!(bool::from(g.is_valid()));
        assert_eq!(g.pow(&Gt::order()), Gt::identity());
    }

    #[test]
    fn pow_matches_repeated_multiplication() {
        let g = Gt::generator();
        assert_eq!(g.pow(&Bn::from(3)), g * g * g);
        assert_eq!(g.pow(&Bn::from(-1)), g.invert());
        assert_eq!(g.pow(&Bn::zero()), Gt::identity());
        assert_eq!(g / g, Gt::identity());
    }

    #[test]
    fn in_place_chaining() {
        let g = Gt::generator();
        let mut x = g;
        x.square_in_place().mul_in_place(&g).invert_in_place();
        assert_eq!(x, g.pow(&Bn::from(-3)));
        x.pow_in_place(&Bn::from(-1)).div_in_place(&g);
        assert_eq!(x, g.square());
    }

    #[test]
    fn decoding() {
        let g = Gt::generator();
        assert_eq!(Gt::from_bytes(&g.to_bytes()).unwrap(), g);
        assert_eq!(Gt::from_bytes(&[0u8; 575]), Err(Error::Format));
        // zero is canonical but not in GT
        assert_eq!(Gt::from_bytes(&[0u8; 576]), Err(Error::Validation));
        assert_eq!(Gt::from_bytes(&[0xffu8; 576]), Err(Error::Validation));
    }
}

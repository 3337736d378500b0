//! Arbitrary precision signed integer.

use crate::{Error, Result};
use core::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex},
    str::FromStr,
};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

/// Arbitrary precision signed integer.
///
/// Values are immutable from the caller's point of view: arithmetic returns
/// fresh values. The `*_assign` operators and the `*_in_place` methods
/// overwrite the receiver and are provided as a performance path.
///
/// `/` truncates towards zero like the primitive integers, but `%` is the
/// non-negative residue in `[0, |m|)` (see [`Bn::modulo`]). Both operators
/// panic on a zero divisor; use [`Bn::div_rem`] and [`Bn::modulo`] for the
/// fallible forms.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bn(pub(crate) BigInt);

impl Bn {
    /// Returns zero.
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// Returns one.
    pub fn one() -> Self {
        Self(BigInt::one())
    }

    /// Parses a decimal string of the form `-?[0-9]+`.
    pub fn from_decimal(s: &str) -> Result<Self> {
        Self::from_radix(s, 10)
    }

    /// Parses a hexadecimal string of the form `-?[0-9a-fA-F]+`.
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_radix(s, 16)
    }

    /// Parses a string of digits in the given radix with an optional leading
    /// minus sign. No whitespace, `+` sign, prefix or digit separator is
    /// accepted.
    pub fn from_radix(s: &str, radix: u32) -> Result<Self> {
        if !(2..=36).contains(&radix) {
            return Err(Error::Domain);
        }

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(Error::Format);
        }

        let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix).ok_or(Error::Format)?;
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(Self(BigInt::from_biguint(sign, magnitude)))
    }

    /// Decodes an unsigned big-endian magnitude. The empty slice decodes to
    /// zero.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self(BigInt::from_bytes_be(Sign::Plus, bytes))
    }

    /// Encodes the magnitude as minimal big-endian bytes. Zero encodes as the
    /// empty vector.
    ///
    /// Fails with [`Error::Sign`] for negative values.
    pub fn to_bytes_be(&self) -> Result<Vec<u8>> {
        if self.is_negative() {
            return Err(Error::Sign);
        }
        if self.is_zero() {
            return Ok(Vec::new());
        }
        Ok(self.0.magnitude().to_bytes_be())
    }

    /// Encodes the magnitude as big-endian bytes left padded with zeros to
    /// exactly `len` bytes.
    ///
    /// Fails with [`Error::Sign`] for negative values and [`Error::Domain`]
    /// when the value does not fit.
    pub fn to_bytes_be_padded(&self, len: usize) -> Result<Vec<u8>> {
        let bytes = self.to_bytes_be()?;
        if bytes.len() > len {
            return Err(Error::Domain);
        }
        let mut out = vec![0u8; len];
        out[len - bytes.len()..].copy_from_slice(&bytes);
        Ok(out)
    }

    /// Upper-case hexadecimal representation with a leading `-` for negative
    /// values, e.g. `"FF"` or `"-F"`.
    pub fn to_hex(&self) -> String {
        format!("{:X}", self.0)
    }

    /// Decimal representation.
    pub fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }

    /// Representation in the given radix (2 to 36) using upper-case digits.
    pub fn to_radix(&self, radix: u32) -> Result<String> {
        if !(2..=36).contains(&radix) {
            return Err(Error::Domain);
        }
        Ok(self.0.to_str_radix(radix).to_uppercase())
    }

    /// Converts to `i64` if the value fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    /// Is this value zero?
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Is this value one?
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Is this value strictly negative?
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Is this value strictly positive?
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// Is the magnitude odd?
    pub fn is_odd(&self) -> bool {
        self.0.is_odd()
    }

    /// Is the magnitude even?
    pub fn is_even(&self) -> bool {
        self.0.is_even()
    }

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    pub fn sign(&self) -> i8 {
        match self.0.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Number of bits of the magnitude. Zero has no bits.
    pub fn num_bits(&self) -> u64 {
        self.0.magnitude().bits()
    }

    /// Tests bit `n` of the magnitude, counting from the least significant
    /// bit.
    pub fn is_bit_set(&self, n: u64) -> bool {
        self.0.magnitude().bit(n)
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Computes `self * self`.
    pub fn square(&self) -> Self {
        Self(&self.0 * &self.0)
    }

    /// Computes `2 * self`.
    pub fn double(&self) -> Self {
        Self(&self.0 << 1u32)
    }

    /// Computes `self / 2`, truncating towards zero.
    pub fn halve(&self) -> Self {
        Self(&self.0 / 2u32)
    }

    /// Truncating division returning `(quotient, remainder)`. The remainder
    /// carries the sign of the dividend.
    ///
    /// Fails with [`Error::Domain`] when `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(Error::Domain);
        }
        let (q, r) = self.0.div_rem(&divisor.0);
        Ok((Self(q), Self(r)))
    }

    /// Truncating division.
    ///
    /// Fails with [`Error::Domain`] when `divisor` is zero.
    pub fn int_div(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Negates the value in place.
    pub fn negate_in_place(&mut self) -> &mut Self {
        self.0 = -core::mem::take(&mut self.0);
        self
    }

    /// Greatest common divisor of the magnitudes. Always non-negative.
    pub fn gcd(&self, other: &Self) -> Self {
        Self(self.0.gcd(&other.0))
    }

    /// Extended Euclid: returns `(g, x, y)` with `g = gcd(self, other) >= 0`
    /// and `self * x + other * y == g`.
    pub fn ext_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let (mut old_r, mut r) = (self.0.clone(), other.0.clone());
        let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
        let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

        while !r.is_zero() {
            let q = &old_r / &r;
            let next_r = &old_r - &q * &r;
            old_r = core::mem::replace(&mut r, next_r);
            let next_s = &old_s - &q * &s;
            old_s = core::mem::replace(&mut s, next_s);
            let next_t = &old_t - &q * &t;
            old_t = core::mem::replace(&mut t, next_t);
        }

        if old_r.is_negative() {
            (Self(-old_r), Self(-old_s), Self(-old_t))
        } else {
            (Self(old_r), Self(old_s), Self(old_t))
        }
    }
}

impl Debug for Bn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Bn({})", self.0)
    }
}

impl Display for Bn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl LowerHex for Bn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(&self.0, f)
    }
}

impl UpperHex for Bn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        UpperHex::fmt(&self.0, f)
    }
}

impl FromStr for Bn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_decimal(s)
    }
}

macro_rules! impl_from_primitive {
    ($($int:ty),+) => {
        $(
            impl From<$int> for Bn {
                fn from(n: $int) -> Bn {
                    Bn(BigInt::from(n))
                }
            }
        )+
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl PartialEq<i64> for Bn {
    fn eq(&self, other: &i64) -> bool {
        self.0 == BigInt::from(*other)
    }
}

impl PartialOrd<i64> for Bn {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.0.cmp(&BigInt::from(*other)))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Bn {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let mut bytes = vec![u8::from(self.is_negative())];
        bytes.extend_from_slice(&self.abs().to_bytes_be().map_err(ser::Error::custom)?);
        serdect::slice::serialize_hex_upper_or_bin(&bytes, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Bn {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let bytes = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        match bytes.split_first() {
            Some((0, rest)) => Ok(Bn::from_bytes_be(rest)),
            Some((1, rest)) => Ok(-Bn::from_bytes_be(rest)),
            _ => Err(de::Error::custom(Error::Format)),
        }
    }
}

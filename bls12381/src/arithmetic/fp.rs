//! Base field `Fp` of BLS12-381.

use crate::Bn;
use core::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};
use elliptic_curve::{
    bigint::{
        Encoding, NonZero, U384, U512, impl_modulus,
        modular::constant_mod::{Residue, ResidueParams},
    },
    ff::Field,
    generic_array::GenericArray,
    hash2curve::FromOkm,
};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption};

use super::{CoordinateField, sqrt_ratio};

const MODULUS_HEX: &str = "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";

impl_modulus!(FpModulus, U384, MODULUS_HEX);

pub(crate) type FpResidue = Residue<FpModulus, { FpModulus::LIMBS }>;

/// `p - 2`
const INV_EXP: U384 = U384::from_be_hex("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaa9");

/// `(p + 1) / 4`
const SQRT_EXP: U384 = U384::from_be_hex("0680447a8e5ff9a692c6e9ed90d2eb35d91dd2e13ce144afd9cc34a83dac3d8907aaffffac54ffffee7fbfffffffeaab");

/// `(p - 1) / 2`
const LEGENDRE_EXP: U384 = U384::from_be_hex("0d0088f51cbff34d258dd3db21a5d66bb23ba5c279c2895fb39869507b587b120f55ffff58a9ffffdcff7fffffffd555");

/// Element of the 381-bit prime field, kept in Montgomery form.
#[derive(Clone, Copy, Default)]
pub struct Fp(pub(crate) FpResidue);

impl Fp {
    /// Zero element.
    pub const ZERO: Self = Self(FpResidue::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(FpResidue::ONE);

    /// Length of the big-endian encoding.
    pub const BYTES: usize = 48;

    pub(crate) const MODULUS: U384 = U384::from_be_hex(MODULUS_HEX);

    /// Builds a constant from 96 big-endian hex digits.
    pub(crate) const fn from_be_hex(hex: &str) -> Self {
        Self(FpResidue::new(&U384::from_be_hex(hex)))
    }

    /// Embeds a small integer.
    pub const fn from_u64(n: u64) -> Self {
        Self(FpResidue::new(&U384::from_u64(n)))
    }

    /// Field modulus `p`.
    pub fn modulus() -> Bn {
        Bn::from_bytes_be(&Self::MODULUS.to_be_bytes())
    }

    /// Decodes a canonical big-endian encoding, rejecting values `>= p`.
    pub fn from_bytes(bytes: &[u8; 48]) -> CtOption<Self> {
        let value = U384::from_be_bytes(*bytes);
        CtOption::new(Self(FpResidue::new(&value)), value.ct_lt(&Self::MODULUS))
    }

    /// Canonical big-endian encoding.
    pub fn to_bytes(&self) -> [u8; 48] {
        self.0.retrieve().to_be_bytes()
    }

    /// Reduces an integer of any sign modulo `p`.
    pub fn from_bn(n: &Bn) -> Self {
        let reduced = n.modulo(&Self::modulus()).expect("modulus is non-zero");
        let bytes = reduced
            .to_bytes_be_padded(Self::BYTES)
            .expect("reduced value fits the modulus size");
        Self(FpResidue::new(&U384::from_be_slice(&bytes)))
    }

    /// Canonical integer representative in `[0, p)`.
    pub fn to_bn(&self) -> Bn {
        Bn::from_bytes_be(&self.to_bytes())
    }

    /// Add elements.
    pub const fn add(&self, rhs: &Self) -> Self {
        Self(self.0.add(&rhs.0))
    }

    /// Double element (add it to itself).
    #[must_use]
    pub const fn double(&self) -> Self {
        Self(self.0.add(&self.0))
    }

    /// Subtract elements.
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self(self.0.sub(&rhs.0))
    }

    /// Multiply elements.
    pub const fn multiply(&self, rhs: &Self) -> Self {
        Self(self.0.mul(&rhs.0))
    }

    /// Negate element.
    pub const fn neg(&self) -> Self {
        Self(self.0.neg())
    }

    /// Compute modular square.
    #[must_use]
    pub const fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Is this the multiplicative identity?
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Self::ONE)
    }

    /// Compute `1 / self` by Fermat's little theorem. `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(Self(self.0.pow(&INV_EXP)), !self.is_zero())
    }

    /// Square root `self^((p + 1) / 4)`, checked by squaring.
    pub fn sqrt(&self) -> CtOption<Self> {
        let root = Self(self.0.pow(&SQRT_EXP));
        CtOption::new(root, root.square().ct_eq(self))
    }

    /// Euler's criterion. Zero counts as a square.
    pub fn is_square(&self) -> Choice {
        let legendre = self.0.pow(&LEGENDRE_EXP);
        legendre.ct_eq(&FpResidue::ONE) | self.is_zero()
    }

    /// Parity of the canonical representative.
    pub fn sgn0(&self) -> Choice {
        Choice::from(self.to_bytes()[Self::BYTES - 1] & 1)
    }
}

impl Display for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0.retrieve())
    }
}

impl Debug for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fp(0x{:x})", self.0.retrieve())
    }
}

impl LowerHex for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0.retrieve())
    }
}

impl UpperHex for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0.retrieve())
    }
}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(FpResidue::conditional_select(&a.0, &b.0, choice))
    }
}

impl_field_arithmetic!(Fp);

impl FromOkm for Fp {
    type Length = elliptic_curve::consts::U64;

    fn from_okm(data: &GenericArray<u8, Self::Length>) -> Self {
        const WIDE_MODULUS: NonZero<U512> = NonZero::from_uint(U512::from_be_hex("000000000000000000000000000000001a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab"));

        let mut num = U512::from_be_slice(&data[..]);
        num %= WIDE_MODULUS;
        Self(FpResidue::new(&num.resize::<{ U384::LIMBS }>()))
    }
}

impl Field for Fp {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn random(mut rng: impl RngCore) -> Self {
        let mut bytes = GenericArray::default();
        rng.fill_bytes(&mut bytes);
        Self::from_okm(&bytes)
    }

    fn square(&self) -> Self {
        Fp::square(self)
    }

    fn double(&self) -> Self {
        Fp::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp::invert(self)
    }

    fn sqrt(&self) -> CtOption<Self> {
        Fp::sqrt(self)
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        // -1 is a non-square since p = 3 mod 4
        sqrt_ratio(num, div, &-Self::ONE)
    }
}

impl CoordinateField for Fp {
    const ENCODED_LEN: usize = Self::BYTES;

    fn write_be_bytes(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_bytes());
    }

    fn read_be_bytes(bytes: &[u8]) -> CtOption<Self> {
        match <&[u8; 48]>::try_from(bytes) {
            Ok(bytes) => Self::from_bytes(bytes),
            Err(_) => CtOption::new(Self::ZERO, Choice::from(0)),
        }
    }

    fn sgn0(&self) -> Choice {
        Fp::sgn0(self)
    }

    fn is_square(&self) -> Choice {
        Fp::is_square(self)
    }
}

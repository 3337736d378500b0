//! Quadratic extension `Fp2 = Fp[u] / (u^2 + 1)`.

use super::{CoordinateField, fp::Fp, sqrt_ratio};
use core::fmt::{self, Display, Formatter};
use elliptic_curve::{ff::Field, generic_array::GenericArray, hash2curve::FromOkm};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// `(p - 3) / 4` as little-endian words.
const P_MINUS_3_DIV_4: [u64; 6] = [
    0xee7f_bfff_ffff_eaaa,
    0x07aa_ffff_ac54_ffff,
    0xd9cc_34a8_3dac_3d89,
    0xd91d_d2e1_3ce1_44af,
    0x92c6_e9ed_90d2_eb35,
    0x0680_447a_8e5f_f9a6,
];

/// `(p - 1) / 2` as little-endian words.
const P_MINUS_1_DIV_2: [u64; 6] = [
    0xdcff_7fff_ffff_d555,
    0x0f55_ffff_58a9_ffff,
    0xb398_6950_7b58_7b12,
    0xb23b_a5c2_79c2_895f,
    0x258d_d3db_21a5_d66b,
    0x0d00_88f5_1cbf_f34d,
];

/// Element `c0 + c1 * u` of the quadratic extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fp2 {
    /// Constant coefficient.
    pub c0: Fp,
    /// Coefficient of `u`.
    pub c1: Fp,
}

impl Fp2 {
    /// Zero element.
    pub const ZERO: Self = Self::new(Fp::ZERO, Fp::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self::new(Fp::ONE, Fp::ZERO);

    /// Cubic and quadratic non-residue `u + 1` defining `Fp6`.
    pub const NONRESIDUE: Self = Self::new(Fp::ONE, Fp::ONE);

    /// Length of the big-endian encoding.
    pub const BYTES: usize = 2 * Fp::BYTES;

    /// Builds `c0 + c1 * u`.
    pub const fn new(c0: Fp, c1: Fp) -> Self {
        Self { c0, c1 }
    }

    /// Decodes `c0 || c1`, each a canonical 48-byte big-endian value.
    pub fn from_bytes(bytes: &[u8; 96]) -> CtOption<Self> {
        let (lo, hi) = bytes.split_at(Fp::BYTES);
        let c0 = Fp::read_be_bytes(lo);
        let c1 = Fp::read_be_bytes(hi);
        CtOption::new(
            Self::new(c0.unwrap_or(Fp::ZERO), c1.unwrap_or(Fp::ZERO)),
            c0.is_some() & c1.is_some(),
        )
    }

    /// Encodes as `c0 || c1`.
    pub fn to_bytes(&self) -> [u8; 96] {
        let mut out = [0u8; 96];
        out[..Fp::BYTES].copy_from_slice(&self.c0.to_bytes());
        out[Fp::BYTES..].copy_from_slice(&self.c1.to_bytes());
        out
    }

    /// Add elements.
    pub const fn add(&self, rhs: &Self) -> Self {
        Self::new(self.c0.add(&rhs.c0), self.c1.add(&rhs.c1))
    }

    /// Subtract elements.
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self::new(self.c0.sub(&rhs.c0), self.c1.sub(&rhs.c1))
    }

    /// Negate element.
    pub const fn neg(&self) -> Self {
        Self::new(self.c0.neg(), self.c1.neg())
    }

    /// Double element.
    #[must_use]
    pub const fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double())
    }

    /// Karatsuba multiplication.
    pub const fn multiply(&self, rhs: &Self) -> Self {
        let v0 = self.c0.multiply(&rhs.c0);
        let v1 = self.c1.multiply(&rhs.c1);
        let c1 = self
            .c0
            .add(&self.c1)
            .multiply(&rhs.c0.add(&rhs.c1))
            .sub(&v0)
            .sub(&v1);
        Self::new(v0.sub(&v1), c1)
    }

    /// Complex squaring.
    #[must_use]
    pub const fn square(&self) -> Self {
        let c0 = self.c0.add(&self.c1).multiply(&self.c0.sub(&self.c1));
        let c1 = self.c0.multiply(&self.c1).double();
        Self::new(c0, c1)
    }

    /// Multiply by a base field element.
    pub const fn mul_by_fp(&self, rhs: &Fp) -> Self {
        Self::new(self.c0.multiply(rhs), self.c1.multiply(rhs))
    }

    /// Multiply by [`Self::NONRESIDUE`].
    pub const fn mul_by_nonresidue(&self) -> Self {
        Self::new(self.c0.sub(&self.c1), self.c0.add(&self.c1))
    }

    /// `c0 - c1 * u`
    pub const fn conjugate(&self) -> Self {
        Self::new(self.c0, self.c1.neg())
    }

    /// `c0^2 + c1^2`, the norm down to `Fp`.
    pub const fn norm(&self) -> Fp {
        self.c0.square().add(&self.c1.square())
    }

    /// Raises to the `p^power`-th power.
    pub fn frobenius_map(&self, power: usize) -> Self {
        if power % 2 == 1 {
            self.conjugate()
        } else {
            *self
        }
    }

    /// Is this the multiplicative identity?
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Self::ONE)
    }

    /// Compute `1 / self`. `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        self.norm()
            .invert()
            .map(|inv| self.conjugate().mul_by_fp(&inv))
    }

    /// Square root for `p = 3 mod 4` (RFC 9380, appendix I.3).
    pub fn sqrt(&self) -> CtOption<Self> {
        let a1 = self.pow_vartime(P_MINUS_3_DIV_4);
        let alpha = a1.square() * self;
        let x0 = a1 * self;

        let minus_one = -Self::ONE;
        let rotated = Self::new(-x0.c1, x0.c0);
        let scaled = (alpha + Self::ONE).pow_vartime(P_MINUS_1_DIV_2) * x0;
        let root = Self::conditional_select(&scaled, &rotated, alpha.ct_eq(&minus_one));

        CtOption::new(root, root.square().ct_eq(self))
    }

    /// An element of `Fp2` is a square iff its norm is a square in `Fp`.
    pub fn is_square(&self) -> Choice {
        self.norm().is_square()
    }

    /// RFC 9380 `sgn0` for `m = 2`.
    pub fn sgn0(&self) -> Choice {
        let sign_0 = self.c0.sgn0();
        let zero_0 = self.c0.is_zero();
        let sign_1 = self.c1.sgn0();
        sign_0 | (zero_0 & sign_1)
    }
}

impl Display for Fp2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}*u", self.c0, self.c1)
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            Fp::conditional_select(&a.c0, &b.c0, choice),
            Fp::conditional_select(&a.c1, &b.c1, choice),
        )
    }
}

impl_field_arithmetic!(Fp2);

impl From<Fp> for Fp2 {
    fn from(c0: Fp) -> Self {
        Self::new(c0, Fp::ZERO)
    }
}

impl FromOkm for Fp2 {
    type Length = elliptic_curve::consts::U128;

    fn from_okm(data: &GenericArray<u8, Self::Length>) -> Self {
        let (lo, hi) = data.split_at(64);
        Self::new(
            Fp::from_okm(GenericArray::from_slice(lo)),
            Fp::from_okm(GenericArray::from_slice(hi)),
        )
    }
}

impl Field for Fp2 {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn random(mut rng: impl RngCore) -> Self {
        Self::new(Fp::random(&mut rng), Fp::random(&mut rng))
    }

    fn square(&self) -> Self {
        Fp2::square(self)
    }

    fn double(&self) -> Self {
        Fp2::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp2::invert(self)
    }

    fn sqrt(&self) -> CtOption<Self> {
        Fp2::sqrt(self)
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        sqrt_ratio(num, div, &Self::NONRESIDUE)
    }
}

impl CoordinateField for Fp2 {
    const ENCODED_LEN: usize = Self::BYTES;

    fn write_be_bytes(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_bytes());
    }

    fn read_be_bytes(bytes: &[u8]) -> CtOption<Self> {
        match <&[u8; 96]>::try_from(bytes) {
            Ok(bytes) => Self::from_bytes(bytes),
            Err(_) => CtOption::new(Self::ZERO, Choice::from(0)),
        }
    }

    fn sgn0(&self) -> Choice {
        Fp2::sgn0(self)
    }

    fn is_square(&self) -> Choice {
        Fp2::is_square(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Fp2;
    use crate::arithmetic::fp::Fp;
    use elliptic_curve::ff::Field;
    use proptest::{prelude::any, prop_compose, proptest};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    prop_compose! {
        fn fp2()(seed in any::<u64>()) -> Fp2 {
            Fp2::random(ChaCha8Rng::seed_from_u64(seed))
        }
    }

    #[test]
    fn u_squared_is_minus_one() {
        let u = Fp2::new(Fp::ZERO, Fp::ONE);
        assert_eq!(u.square(), -Fp2::ONE);
        assert_eq!(u * u, -Fp2::ONE);
    }

    #[test]
    fn nonresidue_is_not_square() {
        assert_eq!(Fp2::NONRESIDUE.is_square().unwrap_u8(), 0);
        assert_eq!(Fp2::NONRESIDUE.sqrt().is_none().unwrap_u8(), 1);
        // -1 is a square in Fp2 (its root is u)
        assert_eq!((-Fp2::ONE).is_square().unwrap_u8(), 1);
        let root = (-Fp2::ONE).sqrt().unwrap();
        assert_eq!(root.square(), -Fp2::ONE);
    }

    #[test]
    fn sgn0_rules() {
        let one = Fp::ONE;
        assert_eq!(Fp2::new(one, Fp::ZERO).sgn0().unwrap_u8(), 1);
        assert_eq!(Fp2::new(Fp::ZERO, one).sgn0().unwrap_u8(), 1);
        assert_eq!(Fp2::new(Fp::from_u64(2), one).sgn0().unwrap_u8(), 0);
        assert_eq!(Fp2::ZERO.sgn0().unwrap_u8(), 0);
    }

    #[test]
    fn frobenius_is_conjugation() {
        let a = Fp2::new(Fp::from_u64(3), Fp::from_u64(5));
        assert_eq!(a.frobenius_map(1), a.conjugate());
        assert_eq!(a.frobenius_map(2), a);
    }

    proptest! {
        #[test]
        fn mul_matches_square(a in fp2()) {
            assert_eq!(a * a, a.square());
        }

        #[test]
        fn invert(a in fp2()) {
            if !bool::from(a.is_zero()) {
                assert_eq!(a * a.invert().unwrap(), Fp2::ONE);
            }
        }

        #[test]
        fn sqrt_of_square(a in fp2()) {
            let square = a.square();
            assert_eq!(square.is_square().unwrap_u8(), 1);
            let root = square.sqrt().unwrap();
            assert!(root == a || root == -a);
        }

        #[test]
        fn sqrt_ratio_of_non_square(a in fp2()) {
            if !bool::from(a.is_zero()) {
                let non_square = a.square() * Fp2::NONRESIDUE;
                let (is_square, root) = Fp2::sqrt_ratio(&non_square, &Fp2::ONE);
                assert!(!bool::from(is_square));
                assert_eq!(root.square(), non_square * Fp2::NONRESIDUE);
            }
        }

        #[test]
        fn bytes_round_trip(a in fp2()) {
            assert_eq!(Fp2::from_bytes(&a.to_bytes()).unwrap(), a);
        }
    }
}

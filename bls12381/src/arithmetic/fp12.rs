//! Quadratic extension `Fp12 = Fp6[w] / (w^2 - v)`, home of the target group.

use super::{fp::Fp, fp2::Fp2, fp6::Fp6};
use crate::params::params;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Element `c0 + c1 * w`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fp12 {
    /// Constant coefficient.
    pub c0: Fp6,
    /// Coefficient of `w`.
    pub c1: Fp6,
}

impl Fp12 {
    /// Zero element.
    pub const ZERO: Self = Self::new(Fp6::ZERO, Fp6::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self::new(Fp6::ONE, Fp6::ZERO);

    /// Length of the big-endian encoding.
    pub const BYTES: usize = 12 * Fp::BYTES;

    /// Builds `c0 + c1 * w`.
    pub const fn new(c0: Fp6, c1: Fp6) -> Self {
        Self { c0, c1 }
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

    /// Karatsuba multiplication over `Fp6`.
    pub const fn multiply(&self, rhs: &Self) -> Self {
        let aa = self.c0.multiply(&rhs.c0);
        let bb = self.c1.multiply(&rhs.c1);
        let c1 = self
            .c0
            .add(&self.c1)
            .multiply(&rhs.c0.add(&rhs.c1))
            .sub(&aa)
            .sub(&bb);
        Self::new(aa.add(&bb.mul_by_v()), c1)
    }

    /// Complex squaring.
    #[must_use]
    pub const fn square(&self) -> Self {
        let ab = self.c0.multiply(&self.c1);
        let c0 = self
            .c0
            .add(&self.c1)
            .multiply(&self.c0.add(&self.c1.mul_by_v()))
            .sub(&ab)
            .sub(&ab.mul_by_v());
        Self::new(c0, ab.add(&ab))
    }

    /// `c0 - c1 * w`, equal to `self^(p^6)`. For elements of the
    /// cyclotomic subgroup this is the inverse.
    pub const fn conjugate(&self) -> Self {
        Self::new(self.c0, self.c1.neg())
    }

    /// Is this the zero element?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Is this the multiplicative identity?
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Self::ONE)
    }

    /// Compute `1 / self = (c0 - c1 * w) / (c0^2 - v * c1^2)`. `None` for
    /// zero.
    pub fn invert(&self) -> CtOption<Self> {
        (self.c0.square() - self.c1.square().mul_by_v())
            .invert()
            .map(|t| Self::new(self.c0 * t, -(self.c1 * t)))
    }

    /// Raises to the `p^power`-th power.
    pub fn frobenius_map(&self, power: usize) -> Self {
        (0..power).fold(*self, |acc, _| acc.frobenius())
    }

    fn frobenius(&self) -> Self {
        let gamma = &params().frobenius;
        let c1 = Fp6::new(
            self.c1.c0.conjugate() * gamma[1],
            self.c1.c1.conjugate() * gamma[3],
            self.c1.c2.conjugate() * gamma[5],
        );
        Self::new(self.c0.frobenius_map(1), c1)
    }

    /// Exponentiation by a little-endian word slice.
    ///
    /// **This operation is variable time with respect to the exponent.**
    pub fn pow_vartime(&self, exp: &[u64]) -> Self {
        let mut res = Self::ONE;
        for word in exp.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if (word >> i) & 1 == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    fn coefficients(&self) -> [&Fp2; 6] {
        [
            &self.c0.c0,
            &self.c0.c1,
            &self.c0.c2,
            &self.c1.c0,
            &self.c1.c1,
            &self.c1.c2,
        ]
    }

    /// Encodes the twelve `Fp` coefficients as `c0.c0.c0 || c0.c0.c1 ||
    /// c0.c1.c0 || ... || c1.c2.c1`.
    pub fn to_bytes(&self) -> [u8; 576] {
        let mut out = [0u8; 576];
        for (chunk, coeff) in out.chunks_exact_mut(Fp2::BYTES).zip(self.coefficients()) {
            chunk.copy_from_slice(&coeff.to_bytes());
        }
        out
    }

    /// Decodes the layout produced by [`Fp12::to_bytes`], rejecting
    /// non-canonical coefficients.
    pub fn from_bytes(bytes: &[u8; 576]) -> CtOption<Self> {
        let mut is_some = Choice::from(1);
        let mut coeffs = [Fp2::ZERO; 6];
        for (coeff, chunk) in coeffs.iter_mut().zip(bytes.chunks_exact(Fp2::BYTES)) {
            let mut buf = [0u8; 96];
            buf.copy_from_slice(chunk);
            let decoded = Fp2::from_bytes(&buf);
            is_some &= decoded.is_some();
            *coeff = decoded.unwrap_or(Fp2::ZERO);
        }
        let [a, b, c, d, e, f] = coeffs;
        CtOption::new(Self::new(Fp6::new(a, b, c), Fp6::new(d, e, f)), is_some)
    }
}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            Fp6::conditional_select(&a.c0, &b.c0, choice),
            Fp6::conditional_select(&a.c1, &b.c1, choice),
        )
    }
}

impl_field_arithmetic!(Fp12);

impl From<Fp6> for Fp12 {
    fn from(c0: Fp6) -> Self {
        Self::new(c0, Fp6::ZERO)
    }
}

//! Cubic extension `Fp6 = Fp2[v] / (v^3 - (u + 1))`.

use super::fp2::Fp2;
use crate::params::params;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Element `c0 + c1 * v + c2 * v^2`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fp6 {
    /// Constant coefficient.
    pub c0: Fp2,
    /// Coefficient of `v`.
    pub c1: Fp2,
    /// Coefficient of `v^2`.
    pub c2: Fp2,
}

impl Fp6 {
    /// Zero element.
    pub const ZERO: Self = Self::new(Fp2::ZERO, Fp2::ZERO, Fp2::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self::new(Fp2::ONE, Fp2::ZERO, Fp2::ZERO);

    /// Builds `c0 + c1 * v + c2 * v^2`.
    pub const fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Self {
        Self { c0, c1, c2 }
    }

    /// Add elements.
    pub const fn add(&self, rhs: &Self) -> Self {
        Self::new(self.c0.add(&rhs.c0), self.c1.add(&rhs.c1), self.c2.add(&rhs.c2))
    }

    /// Subtract elements.
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self::new(self.c0.sub(&rhs.c0), self.c1.sub(&rhs.c1), self.c2.sub(&rhs.c2))
    }

    /// Negate element.
    pub const fn neg(&self) -> Self {
        Self::new(self.c0.neg(), self.c1.neg(), self.c2.neg())
    }

    /// Karatsuba multiplication with three-term interpolation.
    pub const fn multiply(&self, rhs: &Self) -> Self {
        let t0 = self.c0.multiply(&rhs.c0);
        let t1 = self.c1.multiply(&rhs.c1);
        let t2 = self.c2.multiply(&rhs.c2);

        let c0 = self
            .c1
            .add(&self.c2)
            .multiply(&rhs.c1.add(&rhs.c2))
            .sub(&t1)
            .sub(&t2)
            .mul_by_nonresidue()
            .add(&t0);
        let c1 = self
            .c0
            .add(&self.c1)
            .multiply(&rhs.c0.add(&rhs.c1))
            .sub(&t0)
            .sub(&t1)
            .add(&t2.mul_by_nonresidue());
        let c2 = self
            .c0
            .add(&self.c2)
            .multiply(&rhs.c0.add(&rhs.c2))
            .sub(&t0)
            .sub(&t2)
            .add(&t1);

        Self::new(c0, c1, c2)
    }

    /// Compute `self^2`.
    #[must_use]
    pub const fn square(&self) -> Self {
        self.multiply(self)
    }

    /// Multiply by `v`, shifting coefficients up and folding `v^3 = u + 1`.
    pub const fn mul_by_v(&self) -> Self {
        Self::new(self.c2.mul_by_nonresidue(), self.c0, self.c1)
    }

    /// Multiply every coefficient by an `Fp2` element.
    pub const fn mul_by_fp2(&self, rhs: &Fp2) -> Self {
        Self::new(self.c0.multiply(rhs), self.c1.multiply(rhs), self.c2.multiply(rhs))
    }

    /// Is this the zero element?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Is this the multiplicative identity?
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Self::ONE)
    }

    /// Compute `1 / self` through the norm to `Fp2`. `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        let (a, b, c) = (self.c0, self.c1, self.c2);
        let t0 = a.square() - (b * c).mul_by_nonresidue();
        let t1 = c.square().mul_by_nonresidue() - a * b;
        let t2 = b.square() - a * c;
        let norm = a * t0 + (c * t1).mul_by_nonresidue() + (b * t2).mul_by_nonresidue();
        norm.invert().map(|inv| Self::new(t0 * inv, t1 * inv, t2 * inv))
    }

    /// Raises to the `p^power`-th power.
    pub fn frobenius_map(&self, power: usize) -> Self {
        (0..power).fold(*self, |acc, _| acc.frobenius())
    }

    fn frobenius(&self) -> Self {
        let gamma = &params().frobenius;
        Self::new(
            self.c0.conjugate(),
            self.c1.conjugate() * gamma[2],
            self.c2.conjugate() * gamma[4],
        )
    }
}

impl ConstantTimeEq for Fp6 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl ConditionallySelectable for Fp6 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            Fp2::conditional_select(&a.c0, &b.c0, choice),
            Fp2::conditional_select(&a.c1, &b.c1, choice),
            Fp2::conditional_select(&a.c2, &b.c2, choice),
        )
    }
}

impl_field_arithmetic!(Fp6);

impl From<Fp2> for Fp6 {
    fn from(c0: Fp2) -> Self {
        Self::new(c0, Fp2::ZERO, Fp2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::Fp6;
    use crate::arithmetic::{fp::Fp, fp2::Fp2};
    use elliptic_curve::ff::Field;
    use proptest::{prelude::any, prop_compose, proptest};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    prop_compose! {
        fn fp6()(seed in any::<u64>()) -> Fp6 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            Fp6::new(Fp2::random(&mut rng), Fp2::random(&mut rng), Fp2::random(&mut rng))
        }
    }

    fn v() -> Fp6 {
        Fp6::new(Fp2::ZERO, Fp2::ONE, Fp2::ZERO)
    }

    #[test]
    fn v_cubed_is_nonresidue() {
        assert_eq!(v() * v() * v(), Fp6::from(Fp2::NONRESIDUE));
    }

    #[test]
    fn frobenius_matches_power() {
        let a = Fp6::new(
            Fp2::new(Fp::from_u64(1), Fp::from_u64(2)),
            Fp2::new(Fp::from_u64(3), Fp::from_u64(4)),
            Fp2::new(Fp::from_u64(5), Fp::from_u64(6)),
        );
        let p = Fp::modulus();
        let mut expected = Fp6::ONE;
        for i in (0..p.num_bits()).rev() {
            expected = expected.square();
            if p.is_bit_set(i) {
                expected *= a;
            }
        }
        assert_eq!(a.frobenius_map(1), expected);
        assert_eq!(a.frobenius_map(6), a);
    }

    #[test]
    fn zero_has_no_inverse() {
        assert_eq!(Fp6::ZERO.invert().is_none().unwrap_u8(), 1);
    }

    proptest! {
        #[test]
        fn mul_by_v(a in fp6()) {
            assert_eq!(a.mul_by_v(), a * v());
        }

        #[test]
        fn invert(a in fp6()) {
            assert_eq!(a * a.invert().unwrap(), Fp6::ONE);
        }

        #[test]
        fn distributive(a in fp6(), b in fp6(), c in fp6()) {
            assert_eq!(a * (b + c), a * b + a * c);
        }
    }
}

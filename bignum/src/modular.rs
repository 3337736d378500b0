//! Modular arithmetic.
//!
//! Every operation taking a modulus `m` works with the residues in `[0, |m|)`
//! and fails with [`Error::Domain`] for `m == 0`.

use crate::{Bn, Error, Result};
use num_integer::Integer;
use num_traits::Signed;

impl Bn {
    /// Non-negative residue of `self` modulo `m`, always in `[0, |m|)`.
    pub fn modulo(&self, m: &Bn) -> Result<Bn> {
        if m.is_zero() {
            return Err(Error::Domain);
        }
        Ok(Bn(self.0.mod_floor(&m.0.abs())))
    }

    /// Reduces `self` modulo `m` in place.
    pub fn mod_in_place(&mut self, m: &Bn) -> Result<&mut Self> {
        *self = self.modulo(m)?;
        Ok(self)
    }

    /// Computes `(self + other) mod m`.
    pub fn mod_add(&self, other: &Bn, m: &Bn) -> Result<Bn> {
        (self + other).modulo(m)
    }

    /// Computes `(self - other) mod m`.
    pub fn mod_sub(&self, other: &Bn, m: &Bn) -> Result<Bn> {
        (self - other).modulo(m)
    }

    /// Computes `(self * other) mod m`.
    pub fn mod_mul(&self, other: &Bn, m: &Bn) -> Result<Bn> {
        (self * other).modulo(m)
    }

    /// Computes the inverse of `self` modulo `m` in `[0, |m|)`.
    ///
    /// Fails with [`Error::NoInverse`] when `gcd(self, m) != 1`, which
    /// includes `m == 0`.
    pub fn mod_inverse(&self, m: &Bn) -> Result<Bn> {
        if m.is_zero() {
            return Err(Error::NoInverse);
        }
        let a = self.modulo(m)?;
        let (g, x, _) = a.ext_gcd(m);
        if !g.is_one() {
            return Err(Error::NoInverse);
        }
        x.modulo(m)
    }

    /// Raises `self` to `exp`, optionally modulo `modulus`.
    ///
    /// Square-and-multiply over the bits of `exp`; with a modulus every
    /// intermediate value is reduced. A negative exponent raises the modular
    /// inverse of the base and fails with [`Error::Domain`] when no modulus is
    /// given. The running time depends on the exponent.
    pub fn pow(&self, exp: &Bn, modulus: Option<&Bn>) -> Result<Bn> {
        let (mut base, exp) = match (exp.is_negative(), modulus) {
            (true, None) => return Err(Error::Domain),
            (true, Some(m)) => (self.mod_inverse(m)?, exp.abs()),
            (false, Some(m)) => (self.modulo(m)?, exp.clone()),
            (false, None) => (self.clone(), exp.clone()),
        };

        let mut acc = match modulus {
            Some(m) => Bn::one().modulo(m)?,
            None => Bn::one(),
        };

        let bits = exp.num_bits();
        for i in 0..bits {
            if exp.is_bit_set(i) {
                acc = match modulus {
                    Some(m) => acc.mod_mul(&base, m)?,
                    None => &acc * &base,
                };
            }
            if i + 1 < bits {
                base = match modulus {
                    Some(m) => base.mod_mul(&base, m)?,
                    None => base.square(),
                };
            }
        }

        Ok(acc)
    }

    /// Computes `self^exp mod m`. See [`Bn::pow`].
    pub fn mod_pow(&self, exp: &Bn, m: &Bn) -> Result<Bn> {
        self.pow(exp, Some(m))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Bn, Error};

    #[test]
    fn modulo_is_non_negative() {
        assert_eq!(Bn::from(-1).modulo(&Bn::from(13)).unwrap(), 12);
        assert_eq!(Bn::from(27).modulo(&Bn::from(-13)).unwrap(), 1);
        assert_eq!(Bn::from(5).modulo(&Bn::zero()), Err(Error::Domain));
    }

    #[test]
    fn inverse() {
        assert_eq!(Bn::from(3).mod_inverse(&Bn::from(16)).unwrap(), 11);
        assert_eq!(Bn::zero().mod_inverse(&Bn::from(13)), Err(Error::NoInverse));
        assert_eq!(Bn::from(4).mod_inverse(&Bn::from(16)), Err(Error::NoInverse));
        assert_eq!(Bn::from(-3).mod_inverse(&Bn::from(16)).unwrap(), 5);
    }

    #[test]
    fn pow() {
        let hundred = Bn::from(100);
        assert_eq!(hundred.pow(&Bn::from(2), None).unwrap(), 10000);
        assert_eq!(hundred.pow(&Bn::from(2), Some(&Bn::from(3))).unwrap(), 1);
        assert_eq!(hundred.mod_pow(&Bn::from(2), &Bn::from(3)).unwrap(), 1);
        assert_eq!(hundred.pow(&Bn::zero(), None).unwrap(), 1);
        assert_eq!(Bn::from(-2).pow(&Bn::from(3), None).unwrap(), -8);
    }

    #[test]
    fn negative_exponent() {
        assert_eq!(Bn::from(3).pow(&Bn::from(-1), None), Err(Error::Domain));
        assert_eq!(Bn::from(3).pow(&Bn::from(-1), Some(&Bn::from(16))).unwrap(), 11);
        assert_eq!(Bn::from(3).pow(&Bn::from(-2), Some(&Bn::from(16))).unwrap(), 9);
        assert_eq!(
            Bn::from(2).pow(&Bn::from(-1), Some(&Bn::from(16))),
            Err(Error::NoInverse)
        );
    }
}

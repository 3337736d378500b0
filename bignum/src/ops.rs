//! `core::ops` implementations for [`Bn`].

use crate::Bn;
use core::{
    iter::{Product, Sum},
    ops::{
        Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, Shr, Sub,
        SubAssign,
    },
};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;

fn add(a: &BigInt, b: &BigInt) -> BigInt {
    a + b
}

fn sub(a: &BigInt, b: &BigInt) -> BigInt {
    a - b
}

fn mul(a: &BigInt, b: &BigInt) -> BigInt {
    a * b
}

fn div(a: &BigInt, b: &BigInt) -> BigInt {
    a / b
}

fn rem(a: &BigInt, b: &BigInt) -> BigInt {
    a.mod_floor(&b.abs())
}

macro_rules! impl_bn_binop {
    ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $op:path) => {
        impl $trait<&Bn> for &Bn {
            type Output = Bn;

            fn $fn(self, rhs: &Bn) -> Bn {
                Bn($op(&self.0, &rhs.0))
            }
        }

        impl $trait<Bn> for &Bn {
            type Output = Bn;

            fn $fn(self, rhs: Bn) -> Bn {
                Bn($op(&self.0, &rhs.0))
            }
        }

        impl $trait<&Bn> for Bn {
            type Output = Bn;

            fn $fn(self, rhs: &Bn) -> Bn {
                Bn($op(&self.0, &rhs.0))
            }
        }

        impl $trait<Bn> for Bn {
            type Output = Bn;

            fn $fn(self, rhs: Bn) -> Bn {
                Bn($op(&self.0, &rhs.0))
            }
        }

        impl $trait<i64> for &Bn {
            type Output = Bn;

            fn $fn(self, rhs: i64) -> Bn {
                Bn($op(&self.0, &BigInt::from(rhs)))
            }
        }

        impl $trait<i64> for Bn {
            type Output = Bn;

            fn $fn(self, rhs: i64) -> Bn {
                Bn($op(&self.0, &BigInt::from(rhs)))
            }
        }

        impl $assign_trait<&Bn> for Bn {
            fn $assign_fn(&mut self, rhs: &Bn) {
                self.0 = $op(&self.0, &rhs.0);
            }
        }

        impl $assign_trait<Bn> for Bn {
            fn $assign_fn(&mut self, rhs: Bn) {
                self.0 = $op(&self.0, &rhs.0);
            }
        }

        impl $assign_trait<i64> for Bn {
            fn $assign_fn(&mut self, rhs: i64) {
                self.0 = $op(&self.0, &BigInt::from(rhs));
            }
        }
    };
}

impl_bn_binop!(Add, add, AddAssign, add_assign, add);
impl_bn_binop!(Sub, sub, SubAssign, sub_assign, sub);
impl_bn_binop!(Mul, mul, MulAssign, mul_assign, mul);
impl_bn_binop!(Div, div, DivAssign, div_assign, div);
impl_bn_binop!(Rem, rem, RemAssign, rem_assign, rem);

impl Neg for Bn {
    type Output = Bn;

    fn neg(self) -> Bn {
        Bn(-self.0)
    }
}

impl Neg for &Bn {
    type Output = Bn;

    fn neg(self) -> Bn {
        Bn(-&self.0)
    }
}

impl Shl<u32> for &Bn {
    type Output = Bn;

    fn shl(self, bits: u32) -> Bn {
        Bn(&self.0 << bits)
    }
}

/// Arithmetic shift, rounding towards negative infinity.
impl Shr<u32> for &Bn {
    type Output = Bn;

    fn shr(self, bits: u32) -> Bn {
        Bn(&self.0 >> bits)
    }
}

impl<'a> Sum<&'a Bn> for Bn {
    fn sum<I: Iterator<Item = &'a Bn>>(iter: I) -> Bn {
        iter.fold(Bn::zero(), |acc, x| acc + x)
    }
}

impl Sum for Bn {
    fn sum<I: Iterator<Item = Bn>>(iter: I) -> Bn {
        iter.fold(Bn::zero(), |acc, x| acc + x)
    }
}

impl<'a> Product<&'a Bn> for Bn {
    fn product<I: Iterator<Item = &'a Bn>>(iter: I) -> Bn {
        iter.fold(Bn::one(), |acc, x| acc * x)
    }
}

#[cfg(test)]
mod tests {
    use crate::Bn;

    #[test]
    fn division_truncates() {
        assert_eq!(Bn::from(-7) / 2, -3);
        assert_eq!(Bn::from(7) / -2, -3);
        assert_eq!(Bn::from(13).div_rem(&Bn::from(9)).unwrap(), (Bn::from(1), Bn::from(4)));
        assert_eq!(Bn::from(-13).div_rem(&Bn::from(9)).unwrap(), (Bn::from(-1), Bn::from(-4)));
    }

    #[test]
    fn remainder_is_non_negative() {
        assert_eq!(Bn::from(-7) % 3, 2);
        assert_eq!(Bn::from(7) % -3, 1);
        assert_eq!(Bn::from(200) % Bn::from(100), 0);
    }

    #[test]
    fn assign_ops_match_pure_ops() {
        let a = Bn::from(1234567);
        let b = Bn::from(-89);
        let mut c = a.clone();
        c += &b;
        assert_eq!(c, &a + &b);
        c *= 3;
        assert_eq!(c, (&a + &b) * 3);
        c -= b.clone();
        assert_eq!(c, (&a + &b) * 3 - &b);
        c %= 1000;
        assert_eq!(c, ((&a + &b) * 3 - &b) % 1000);
    }

    #[test]
    fn shifts_and_folds() {
        assert_eq!(&Bn::from(3) << 4, 48);
        assert_eq!(&Bn::from(-3) >> 1, -2);
        let values = [Bn::from(2), Bn::from(3), Bn::from(7)];
        assert_eq!(values.iter().sum::<Bn>(), 12);
        assert_eq!(values.iter().product::<Bn>(), 42);
    }
}

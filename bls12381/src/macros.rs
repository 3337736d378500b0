//! Macros shared by the field element types.

/// Emit a `core::ops` trait wrapper for an inherent binary method.
macro_rules! field_op {
    ($fe:ty, $op:ident, $func:ident, $inner_func:ident) => {
        impl ::core::ops::$op for $fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: $fe) -> $fe {
                <$fe>::$inner_func(&self, &rhs)
            }
        }

        impl ::core::ops::$op<&$fe> for $fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: &$fe) -> $fe {
                <$fe>::$inner_func(&self, rhs)
            }
        }

        impl ::core::ops::$op<$fe> for &$fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: $fe) -> $fe {
                <$fe>::$inner_func(self, &rhs)
            }
        }

        impl ::core::ops::$op<&$fe> for &$fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: &$fe) -> $fe {
                <$fe>::$inner_func(self, rhs)
            }
        }
    };
}

/// Emit a `core::ops` assignment trait wrapper for an inherent binary method.
macro_rules! field_assign_op {
    ($fe:ty, $op:ident, $func:ident, $inner_func:ident) => {
        impl ::core::ops::$op for $fe {
            #[inline]
            fn $func(&mut self, rhs: $fe) {
                *self = <$fe>::$inner_func(self, &rhs);
            }
        }

        impl ::core::ops::$op<&$fe> for $fe {
            #[inline]
            fn $func(&mut self, rhs: &$fe) {
                *self = <$fe>::$inner_func(self, rhs);
            }
        }
    };
}

/// Implement the arithmetic operator traits, iterator folds and equality for
/// a field element type providing inherent `add`, `sub`, `multiply` and `neg`
/// methods, `ZERO`/`ONE` constants and `ConstantTimeEq`.
macro_rules! impl_field_arithmetic {
    ($fe:ty) => {
        field_op!($fe, Add, add, add);
        field_op!($fe, Sub, sub, sub);
        field_op!($fe, Mul, mul, multiply);
        field_assign_op!($fe, AddAssign, add_assign, add);
        field_assign_op!($fe, SubAssign, sub_assign, sub);
        field_assign_op!($fe, MulAssign, mul_assign, multiply);

        impl ::core::ops::Neg for $fe {
            type Output = $fe;

            #[inline]
            fn neg(self) -> $fe {
                <$fe>::neg(&self)
            }
        }

        impl ::core::ops::Neg for &$fe {
            type Output = $fe;

            #[inline]
            fn neg(self) -> $fe {
                <$fe>::neg(self)
            }
        }

        impl ::core::iter::Sum for $fe {
            fn sum<I: Iterator<Item = $fe>>(iter: I) -> $fe {
                iter.fold(<$fe>::ZERO, |acc, x| acc + x)
            }
        }

        impl<'a> ::core::iter::Sum<&'a $fe> for $fe {
            fn sum<I: Iterator<Item = &'a $fe>>(iter: I) -> $fe {
                iter.fold(<$fe>::ZERO, |acc, x| acc + x)
            }
        }

        impl ::core::iter::Product for $fe {
            fn product<I: Iterator<Item = $fe>>(iter: I) -> $fe {
                iter.fold(<$fe>::ONE, |acc, x| acc * x)
            }
        }

        impl<'a> ::core::iter::Product<&'a $fe> for $fe {
            fn product<I: Iterator<Item = &'a $fe>>(iter: I) -> $fe {
                iter.fold(<$fe>::ONE, |acc, x| acc * x)
            }
        }

        impl PartialEq for $fe {
            fn eq(&self, other: &$fe) -> bool {
                ::subtle::ConstantTimeEq::ct_eq(self, other).into()
            }
        }

        impl Eq for $fe {}
    };
}

//! Mixed arithmetic with native floats.
//!
//! The `Rational` side is converted with [`Rational::to_f64`] or
//! [`Rational::to_f32`] and the operation happens in floating point; the
//! result is the float, never a `Rational`.

use core::ops::{Add, Div, Mul, Sub};

use crate::Rational;

macro_rules! float_binop {
    (impl $imp:ident, $method:ident, $op:tt, $float:ty, $to_float:ident) => {
        impl $imp<$float> for Rational {
            type Output = $float;

            #[inline]
            fn $method(self, rhs: $float) -> $float {
                self.$to_float() $op rhs
            }
        }
        impl<'a> $imp<$float> for &'a Rational {
            type Output = $float;

            #[inline]
            fn $method(self, rhs: $float) -> $float {
                self.$to_float() $op rhs
            }
        }
        impl $imp<Rational> for $float {
            type Output = $float;

            #[inline]
            fn $method(self, rhs: Rational) -> $float {
                self $op rhs.$to_float()
            }
        }
        impl<'b> $imp<&'b Rational> for $float {
            type Output = $float;

            #[inline]
            fn $method(self, rhs: &Rational) -> $float {
                self $op rhs.$to_float()
            }
        }
    };
}

macro_rules! float_impl {
    ($float:ty, $to_float:ident) => {
        float_binop!(impl Add, add, +, $float, $to_float);
        float_binop!(impl Sub, sub, -, $float, $to_float);
        float_binop!(impl Mul, mul, *, $float, $to_float);
        float_binop!(impl Div, div, /, $float, $to_float);
    };
}

float_impl!(f64, to_f64);
float_impl!(f32, to_f32);

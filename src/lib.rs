// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exact rational numbers over arbitrary-precision integers.
//!
//! A [`Rational`] is only ever produced by [`Rational::of`], which keeps every
//! non-zero value in lowest terms with a positive denominator:
//!
//! ```
//! use bigratio::{Over, Rational};
//!
//! let half = Rational::of(2, -4)?;
//! assert_eq!(half.to_string(), "-1/2");
//!
//! let sum = &half + &3_i32.over(4_i32)?;
//! assert_eq!(sum.to_string(), "1/4");
//! # Ok::<(), bigratio::RatioError>(())
//! ```
//!
//! Operators panic when the resulting denominator is zero; the [`TryArith`]
//! methods report the same condition as a [`RatioError`] instead.
//!
//! ## Features
//!
//! - `std` (default): link the standard library.
//! - `float` (default): mixed arithmetic with `f32` and `f64`, yielding floats.
//! - `serde`: (de)serialize as a `(numer, denom)` tuple.

#![no_std]
// Rational ops often use other "suspicious" ops
#![allow(clippy::suspicious_arithmetic_impl)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use alloc::format;
use core::cmp;
use core::fmt;
use core::fmt::{Binary, Display, Formatter, LowerHex, Octal, UpperHex};
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

mod checked;
mod error;
#[cfg(feature = "float")]
mod float;
mod over;

pub use crate::checked::TryArith;
pub use crate::error::{RatioError, RatioErrorKind};
pub use crate::over::Over;

/// Represents the exact ratio between two arbitrary-precision integers.
///
/// Equality is structural: two values are equal when their numerators and
/// denominators are equal pairwise.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    /// Numerator.
    numer: BigInt,
    /// Denominator.
    denom: BigInt,
}

impl Rational {
    /// Creates a `Rational` without checking for `denom == 0` or reducing.
    #[inline]
    const fn new_raw(numer: BigInt, denom: BigInt) -> Rational {
        Rational { numer, denom }
    }

    /// Gets an immutable reference to the numerator.
    #[inline]
    pub const fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Gets an immutable reference to the denominator.
    #[inline]
    pub const fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Deconstructs a `Rational` into its numerator and denominator.
    #[inline]
    pub fn into_raw(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }
}

impl Rational {
    /// Creates a new `Rational` in canonical form.
    ///
    /// A zero numerator keeps the denominator exactly as given. Otherwise the
    /// pair is divided by its greatest common divisor and the sign moves onto
    /// the numerator, leaving a positive denominator.
    ///
    /// Fails with [`RatioErrorKind::DenominatorZero`] if `denom` is zero.
    ///
    /// ```
    /// use bigratio::Rational;
    ///
    /// let r = Rational::of(6, -8)?;
    /// assert_eq!(r.to_string(), "-3/4");
    ///
    /// let zero = Rational::of(0, -5)?;
    /// assert_eq!(zero.to_string(), "0/-5");
    ///
    /// assert!(Rational::of(1, 0).is_err());
    /// # Ok::<(), bigratio::RatioError>(())
    /// ```
    #[inline]
    pub fn of<N, D>(numer: N, denom: D) -> Result<Rational, RatioError>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        Rational::normalize(numer.into(), denom.into())
    }

    /// Creates a `Rational` representing the integer `n`.
    #[inline]
    pub fn from_integer<N: Into<BigInt>>(n: N) -> Rational {
        Rational::new_raw(n.into(), BigInt::one())
    }

    /// The single path to canonical form; every operator ends here.
    pub(crate) fn normalize(numer: BigInt, denom: BigInt) -> Result<Rational, RatioError> {
        if denom.is_zero() {
            tracing::debug!(%numer, "rejecting rational with a zero denominator");
            return Err(RatioError::denominator_zero());
        }
        if numer.is_zero() {
            return Ok(Rational::new_raw(numer, denom));
        }

        let (numer_sign, numer) = numer.into_parts();
        let (denom_sign, denom) = denom.into_parts();
        let g = numer.gcd(&denom);
        let sign = if numer_sign == denom_sign {
            Sign::Plus
        } else {
            Sign::Minus
        };

        Ok(Rational::new_raw(
            BigInt::from_biguint(sign, numer / &g),
            BigInt::from_biguint(Sign::Plus, denom / g),
        ))
    }

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    ///
    /// Zero iff the numerator is zero; otherwise positive iff numerator and
    /// denominator carry the same sign.
    #[inline]
    pub fn signum(&self) -> i8 {
        if self.numer.is_zero() {
            0
        } else if self.numer.sign() == self.denom.sign() {
            1
        } else {
            -1
        }
    }

    /// Swaps numerator and denominator.
    ///
    /// The swap is structural and bypasses [`Rational::of`]: the result is not
    /// renormalized, and inverting a zero yields a value whose denominator is
    /// zero instead of failing. Adding, subtracting or multiplying with such a
    /// value fails, and so does dividing it. Dividing by it puts its zero
    /// denominator into the numerator and succeeds.
    ///
    /// ```
    /// use bigratio::Rational;
    ///
    /// let inv = Rational::of(0, 5)?.inverse();
    /// assert_eq!(inv.to_string(), "5/0");
    /// # Ok::<(), bigratio::RatioError>(())
    /// ```
    #[inline]
    pub fn inverse(&self) -> Rational {
        if self.numer.is_zero() {
            tracing::trace!(denom = %self.denom, "inverting zero leaves a zero denominator");
        }
        Rational::new_raw(self.denom.clone(), self.numer.clone())
    }

    /// Negates the value, failing only when the denominator is zero.
    #[inline]
    pub fn try_neg(&self) -> Result<Rational, RatioError> {
        Rational::normalize(-&self.numer, self.denom.clone())
    }

    /// Returns true if the denominator is one.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Converts numerator and denominator to `f64` and divides them.
    ///
    /// Large magnitudes lose precision and may overflow to infinity.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        big_to_f64(&self.numer) / big_to_f64(&self.denom)
    }

    /// Converts numerator and denominator to `f32` and divides them.
    #[inline]
    pub fn to_f32(&self) -> f32 {
        big_to_f32(&self.numer) / big_to_f32(&self.denom)
    }
}

// `BigInt` saturates to infinity itself; the fallback only keeps the sign.
fn big_to_f64(n: &BigInt) -> f64 {
    n.to_f64().unwrap_or(if n.is_negative() {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    })
}

fn big_to_f32(n: &BigInt) -> f32 {
    n.to_f32().unwrap_or(if n.is_negative() {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    })
}

#[inline]
#[track_caller]
fn unwrap_ratio(result: Result<Rational, RatioError>) -> Rational {
    match result {
        Ok(ratio) => ratio,
        Err(err) => panic!("{}", err),
    }
}

impl Default for Rational {
    /// Returns zero
    fn default() -> Self {
        Rational::zero()
    }
}

// From integer
impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Rational {
        Rational::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Rational {
        Rational::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Rational {
        Rational::from_integer(n)
    }
}

// From pair (through the `of` factory)
impl TryFrom<(BigInt, BigInt)> for Rational {
    type Error = RatioError;

    fn try_from(pair: (BigInt, BigInt)) -> Result<Rational, RatioError> {
        Rational::of(pair.0, pair.1)
    }
}

impl From<Rational> for (BigInt, BigInt) {
    fn from(val: Rational) -> Self {
        val.into_raw()
    }
}

// Comparisons

// a/b < c/d  <=>  a*d < c*b when b*d > 0; each negative denominator flips the
// direction. Values that compare equal by cross product but differ
// structurally (0/5 and 0/-5) are left unordered so that `partial_cmp` agrees
// with `==`.
impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        if self.denom.is_zero() || other.denom.is_zero() {
            return None;
        }
        let lhs = &self.numer * &other.denom;
        let rhs = &other.numer * &self.denom;
        let ord = if self.denom.is_negative() == other.denom.is_negative() {
            lhs.cmp(&rhs)
        } else {
            lhs.cmp(&rhs).reverse()
        };
        Some(ord).filter(|ord| *ord != cmp::Ordering::Equal || self == other)
    }
}

mod iter_sum_product {
    use crate::Rational;
    use core::iter::{Product, Sum};
    use num_traits::{One, Zero};

    impl Sum for Rational {
        fn sum<I>(iter: I) -> Self
        where
            I: Iterator<Item = Rational>,
        {
            iter.fold(Self::zero(), |sum, num| sum + num)
        }
    }

    impl<'a> Sum<&'a Rational> for Rational {
        fn sum<I>(iter: I) -> Self
        where
            I: Iterator<Item = &'a Rational>,
        {
            iter.fold(Self::zero(), |sum, num| sum + num)
        }
    }

    impl Product for Rational {
        fn product<I>(iter: I) -> Self
        where
            I: Iterator<Item = Rational>,
        {
            iter.fold(Self::one(), |prod, num| prod * num)
        }
    }

    impl<'a> Product<&'a Rational> for Rational {
        fn product<I>(iter: I) -> Self
        where
            I: Iterator<Item = &'a Rational>,
        {
            iter.fold(Self::one(), |prod, num| prod * num)
        }
    }
}

// Arithmetic
//
// Every operator is a thin wrapper over `TryArith` and panics where the
// fallible form returns `Err`.
macro_rules! arith_impl {
    ([$($gen:tt)*] $lhs:ty, $rhs:ty) => {
        impl<$($gen)*> Add<$rhs> for $lhs {
            type Output = Rational;

            #[inline]
            #[track_caller]
            fn add(self, rhs: $rhs) -> Rational {
                unwrap_ratio(TryArith::try_add(self, rhs))
            }
        }
        impl<$($gen)*> Sub<$rhs> for $lhs {
            type Output = Rational;

            #[inline]
            #[track_caller]
            fn sub(self, rhs: $rhs) -> Rational {
                unwrap_ratio(TryArith::try_sub(self, rhs))
            }
        }
        impl<$($gen)*> Mul<$rhs> for $lhs {
            type Output = Rational;

            #[inline]
            #[track_caller]
            fn mul(self, rhs: $rhs) -> Rational {
                unwrap_ratio(TryArith::try_mul(self, rhs))
            }
        }
        impl<$($gen)*> Div<$rhs> for $lhs {
            type Output = Rational;

            #[inline]
            #[track_caller]
            fn div(self, rhs: $rhs) -> Rational {
                unwrap_ratio(TryArith::try_div(self, rhs))
            }
        }
    };
}

// a/b `op` c/d
arith_impl!([] Rational, Rational);
arith_impl!(['b] Rational, &'b Rational);
arith_impl!(['a] &'a Rational, Rational);
arith_impl!(['a, 'b] &'a Rational, &'b Rational);

// a/b `op` n/1
arith_impl!([] Rational, BigInt);
arith_impl!(['b] Rational, &'b BigInt);
arith_impl!(['a] &'a Rational, BigInt);
arith_impl!(['a, 'b] &'a Rational, &'b BigInt);
arith_impl!([] Rational, i64);
arith_impl!(['a] &'a Rational, i64);
arith_impl!([] Rational, i32);
arith_impl!(['a] &'a Rational, i32);

// n/1 `op` a/b
arith_impl!([] BigInt, Rational);
arith_impl!(['b] BigInt, &'b Rational);
arith_impl!(['a] &'a BigInt, Rational);
arith_impl!(['a, 'b] &'a BigInt, &'b Rational);
arith_impl!([] i64, Rational);
arith_impl!(['b] i64, &'b Rational);
arith_impl!([] i32, Rational);
arith_impl!(['b] i32, &'b Rational);

impl Neg for Rational {
    type Output = Rational;

    #[inline]
    #[track_caller]
    fn neg(self) -> Rational {
        -&self
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;

    #[inline]
    #[track_caller]
    fn neg(self) -> Rational {
        unwrap_ratio(self.try_neg())
    }
}

impl Zero for Rational {
    #[inline]
    fn zero() -> Rational {
        Rational::new_raw(Zero::zero(), One::one())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    #[inline]
    fn one() -> Rational {
        Rational::new_raw(One::one(), One::one())
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.numer == self.denom
    }
}

// String conversions
macro_rules! impl_formatting {
    ($fmt_trait:ident, $prefix:expr, $fmt_str:expr, $fmt_alt:expr) => {
        impl $fmt_trait for Rational {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                let pre_pad = if f.alternate() {
                    format!(concat!($fmt_str, "/", $fmt_alt), self.numer, self.denom)
                } else {
                    format!(concat!($fmt_str, "/", $fmt_str), self.numer, self.denom)
                };
                if let Some(pre_pad) = pre_pad.strip_prefix('-') {
                    f.pad_integral(false, $prefix, pre_pad)
                } else {
                    f.pad_integral(true, $prefix, &pre_pad)
                }
            }
        }
    };
}

impl_formatting!(Display, "", "{}", "{:#}");
impl_formatting!(Octal, "0o", "{:o}", "{:#o}");
impl_formatting!(Binary, "0b", "{:b}", "{:#b}");
impl_formatting!(LowerHex, "0x", "{:x}", "{:#x}");
impl_formatting!(UpperHex, "0x", "{:X}", "{:#X}");

#[cfg(feature = "serde")]
impl serde::Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&(self.numer(), self.denom()), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let (numer, denom): (BigInt, BigInt) = serde::Deserialize::deserialize(deserializer)?;
        Rational::of(numer, denom).map_err(D::Error::custom)
    }
}

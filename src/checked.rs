use num_bigint::BigInt;

use crate::{RatioError, Rational};

/// Fallible arithmetic producing a [`Rational`].
///
/// Each method computes the raw numerator and denominator and passes them
/// through [`Rational::of`], so the only failure is a zero denominator. The
/// `Add`, `Sub`, `Mul` and `Div` operators on `Rational` have the same
/// semantics but panic instead of returning `Err`.
///
/// Like those operators, the methods take `self` by value: calling one on an
/// owned `Rational` consumes it. Call through a reference, as in
/// `(&x).try_add(..)`, to keep `x` usable.
///
/// ```
/// use bigratio::{Rational, TryArith};
///
/// let third = Rational::of(1, 3)?;
/// assert_eq!((&third).try_div(0_i32).unwrap_err().to_string(), "zero value denominator");
/// assert_eq!(2_i32.try_sub(&third)?.to_string(), "5/3");
/// # Ok::<(), bigratio::RatioError>(())
/// ```
pub trait TryArith<Rhs = Self> {
    /// `self + rhs`
    fn try_add(self, rhs: Rhs) -> Result<Rational, RatioError>;
    /// `self - rhs`
    fn try_sub(self, rhs: Rhs) -> Result<Rational, RatioError>;
    /// `self * rhs`
    fn try_mul(self, rhs: Rhs) -> Result<Rational, RatioError>;
    /// `self / rhs`
    fn try_div(self, rhs: Rhs) -> Result<Rational, RatioError>;
}

// a/b + c/d = (a*d + c*b) / (b*d)
// a/b - c/d = (a*d - c*b) / (b*d)
// a/b * c/d = (a*c) / (b*d)
// a/b / c/d = (a*d) / (b*c)
impl<'a, 'b> TryArith<&'b Rational> for &'a Rational {
    #[inline]
    fn try_add(self, rhs: &Rational) -> Result<Rational, RatioError> {
        Rational::normalize(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }

    #[inline]
    fn try_sub(self, rhs: &Rational) -> Result<Rational, RatioError> {
        Rational::normalize(
            &self.numer * &rhs.denom - &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }

    #[inline]
    fn try_mul(self, rhs: &Rational) -> Result<Rational, RatioError> {
        Rational::normalize(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }

    #[inline]
    fn try_div(self, rhs: &Rational) -> Result<Rational, RatioError> {
        Rational::normalize(&self.numer * &rhs.denom, &self.denom * &rhs.numer)
    }
}

// a/b `op` n/1 = (a `op` n*b) / b for + and -, (a*n) / b, a / (b*n)
impl<'a, 'b> TryArith<&'b BigInt> for &'a Rational {
    #[inline]
    fn try_add(self, rhs: &BigInt) -> Result<Rational, RatioError> {
        Rational::normalize(&self.numer + rhs * &self.denom, self.denom.clone())
    }

    #[inline]
    fn try_sub(self, rhs: &BigInt) -> Result<Rational, RatioError> {
        Rational::normalize(&self.numer - rhs * &self.denom, self.denom.clone())
    }

    #[inline]
    fn try_mul(self, rhs: &BigInt) -> Result<Rational, RatioError> {
        Rational::normalize(&self.numer * rhs, self.denom.clone())
    }

    #[inline]
    fn try_div(self, rhs: &BigInt) -> Result<Rational, RatioError> {
        Rational::normalize(self.numer.clone(), &self.denom * rhs)
    }
}

// n/1 `op` a/b: addition and multiplication commute, subtraction adds n to
// the negation, and division is (n*b) / a.
impl<'a, 'b> TryArith<&'b Rational> for &'a BigInt {
    #[inline]
    fn try_add(self, rhs: &Rational) -> Result<Rational, RatioError> {
        rhs.try_add(self)
    }

    #[inline]
    fn try_sub(self, rhs: &Rational) -> Result<Rational, RatioError> {
        rhs.try_neg()?.try_add(self)
    }

    #[inline]
    fn try_mul(self, rhs: &Rational) -> Result<Rational, RatioError> {
        rhs.try_mul(self)
    }

    #[inline]
    fn try_div(self, rhs: &Rational) -> Result<Rational, RatioError> {
        Rational::normalize(self * &rhs.denom, rhs.numer.clone())
    }
}

macro_rules! by_ref {
    ($e:expr) => {
        &$e
    };
}

macro_rules! as_is {
    ($e:expr) => {
        $e
    };
}

macro_rules! to_big {
    ($e:expr) => {
        &BigInt::from($e)
    };
}

// Forwards an operand combination to one of the by-reference impls above,
// adapting each side with the named conversion.
macro_rules! forward_try_arith {
    ([$($gen:tt)*] $lhs:ty, $rhs:ty, $conv_lhs:ident, $conv_rhs:ident) => {
        impl<$($gen)*> TryArith<$rhs> for $lhs {
            #[inline]
            fn try_add(self, rhs: $rhs) -> Result<Rational, RatioError> {
                TryArith::try_add($conv_lhs!(self), $conv_rhs!(rhs))
            }

            #[inline]
            fn try_sub(self, rhs: $rhs) -> Result<Rational, RatioError> {
                TryArith::try_sub($conv_lhs!(self), $conv_rhs!(rhs))
            }

            #[inline]
            fn try_mul(self, rhs: $rhs) -> Result<Rational, RatioError> {
                TryArith::try_mul($conv_lhs!(self), $conv_rhs!(rhs))
            }

            #[inline]
            fn try_div(self, rhs: $rhs) -> Result<Rational, RatioError> {
                TryArith::try_div($conv_lhs!(self), $conv_rhs!(rhs))
            }
        }
    };
}

forward_try_arith!([] Rational, Rational, by_ref, by_ref);
forward_try_arith!(['b] Rational, &'b Rational, by_ref, as_is);
forward_try_arith!(['a] &'a Rational, Rational, as_is, by_ref);

forward_try_arith!([] Rational, BigInt, by_ref, by_ref);
forward_try_arith!(['b] Rational, &'b BigInt, by_ref, as_is);
forward_try_arith!(['a] &'a Rational, BigInt, as_is, by_ref);
forward_try_arith!([] Rational, i64, by_ref, to_big);
forward_try_arith!(['a] &'a Rational, i64, as_is, to_big);
forward_try_arith!([] Rational, i32, by_ref, to_big);
forward_try_arith!(['a] &'a Rational, i32, as_is, to_big);

forward_try_arith!([] BigInt, Rational, by_ref, by_ref);
forward_try_arith!(['b] BigInt, &'b Rational, by_ref, as_is);
forward_try_arith!(['a] &'a BigInt, Rational, as_is, by_ref);
forward_try_arith!([] i64, Rational, to_big, by_ref);
forward_try_arith!(['b] i64, &'b Rational, to_big, as_is);
forward_try_arith!([] i32, Rational, to_big, by_ref);
forward_try_arith!(['b] i32, &'b Rational, to_big, as_is);

#[cfg(test)]
mod test {
    use super::*;
    use crate::RatioErrorKind;

    fn r(numer: i64, denom: i64) -> Rational {
        Rational::of(numer, denom).unwrap()
    }

    #[test]
    fn test_try_rational() {
        assert_eq!(r(1, 2).try_add(r(1, 3)), Ok(r(5, 6)));
        assert_eq!(r(2, 3).try_sub(&r(1, 6)), Ok(r(1, 2)));
        assert_eq!((&r(2, 3)).try_mul(r(9, 4)), Ok(r(3, 2)));
        assert_eq!((&r(2, 3)).try_div(&r(-4, 5)), Ok(r(-5, 6)));
    }

    #[test]
    fn test_try_div_by_zero() {
        let err = r(1, 2).try_div(r(0, 7)).unwrap_err();
        assert_eq!(err.kind(), RatioErrorKind::DenominatorZero);
        assert!(r(1, 2).try_div(0_i32).is_err());
        assert!(r(1, 2).try_div(0_i64).is_err());
        assert!(r(1, 2).try_div(BigInt::from(0)).is_err());
        assert!(5_i64.try_div(r(0, -2)).is_err());
    }

    #[test]
    fn test_try_zero_denominator_operand() {
        let poisoned = r(0, 4).inverse();
        assert!((&poisoned).try_add(&r(1, 2)).is_err());
        assert!((&poisoned).try_mul(3_i32).is_err());
        assert!(3_i32.try_sub(&poisoned).is_err());
        assert!(BigInt::from(3).try_add(poisoned).is_err());
    }

    #[test]
    fn test_try_int_rhs() {
        let base = r(2, 4);
        assert_eq!((&base).try_add(1_i32), Ok(r(3, 2)));
        assert_eq!((&base).try_sub(1_i64), Ok(r(-1, 2)));
        assert_eq!((&base).try_mul(&BigInt::from(2)), Ok(r(1, 1)));
        assert_eq!(base.try_div(BigInt::from(2)), Ok(r(1, 4)));
    }

    #[test]
    fn test_try_int_lhs() {
        let base = r(2, 4);
        assert_eq!(1_i32.try_add(&base), Ok(r(3, 2)));
        assert_eq!(1_i64.try_sub(&base), Ok(r(1, 2)));
        assert_eq!((&BigInt::from(2)).try_mul(&base), Ok(r(1, 1)));
        assert_eq!(BigInt::from(2).try_div(base), Ok(r(4, 1)));
    }

    #[test]
    fn test_try_sub_lhs_negative_zero() {
        // -(0/-5) keeps its denominator, then 3 + 0/-5 = (0 + 3*-5) / -5
        assert_eq!(3_i32.try_sub(r(0, -5)), Ok(r(3, 1)));
    }
}

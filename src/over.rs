use num_bigint::BigInt;

use crate::{RatioError, Rational};

/// Spells `Rational::of(numer, denom)` as `numer.over(denom)`.
///
/// ```
/// use bigratio::Over;
/// use num_bigint::BigInt;
///
/// assert_eq!(6_i64.over(-8_i32)?.to_string(), "-3/4");
/// assert_eq!(BigInt::from(5).over(10_i64)?.to_string(), "1/2");
/// # Ok::<(), bigratio::RatioError>(())
/// ```
pub trait Over<D> {
    /// Builds the normalized ratio `self / denom`.
    fn over(self, denom: D) -> Result<Rational, RatioError>;
}

macro_rules! over_impl {
    ($numer:ty => $($denom:ty),+) => {
        $(
            impl Over<$denom> for $numer {
                #[inline]
                fn over(self, denom: $denom) -> Result<Rational, RatioError> {
                    Rational::of(self, denom)
                }
            }
        )+
    };
}

over_impl!(i32 => i32, i64, BigInt);
over_impl!(i64 => i32, i64, BigInt);
over_impl!(BigInt => i32, i64, BigInt);

#[cfg(test)]
mod test {
    use super::*;
    use crate::RatioErrorKind;

    fn assert_raw(actual: Result<Rational, RatioError>, numer: i64, denom: i64) {
        let (n, d) = actual.unwrap().into_raw();
        assert_eq!((n, d), (BigInt::from(numer), BigInt::from(denom)));
    }

    #[test]
    fn test_over_int() {
        assert_raw(1_i32.over(2_i32), 1, 2);
        assert_raw(2_i32.over(4_i32), 1, 2);
        assert_raw((-2_i32).over(4_i32), -1, 2);
        assert_raw(2_i32.over(-4_i32), -1, 2);
        assert_raw((-2_i32).over(-4_i32), 1, 2);
    }

    #[test]
    fn test_over_zero_numerator() {
        assert_raw(0_i32.over(5_i32), 0, 5);
        assert_raw(0_i32.over(-5_i32), 0, -5);
    }

    #[test]
    fn test_over_mixed() {
        assert_raw(1_i32.over(2_i64), 1, 2);
        assert_raw(1_i64.over(2_i32), 1, 2);
        assert_raw(6_i64.over(8_i64), 3, 4);
        assert_raw(BigInt::from(5).over(10_i32), 1, 2);
        assert_raw(5_i32.over(BigInt::from(10)), 1, 2);
        assert_raw(5_i64.over(BigInt::from(-10)), -1, 2);
        assert_raw(BigInt::from(-6).over(BigInt::from(-9)), 2, 3);
    }

    #[test]
    fn test_over_zero_denominator() {
        let err = 1_i32.over(0_i64).unwrap_err();
        assert_eq!(err.kind(), RatioErrorKind::DenominatorZero);
        assert!(BigInt::from(0).over(BigInt::from(0)).is_err());
    }
}

use thiserror::Error;

/// Error returned when a `Rational` cannot be constructed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("{}", .kind.description())]
pub struct RatioError {
    kind: RatioErrorKind,
}

/// The reason a `Rational` could not be constructed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RatioErrorKind {
    /// The denominator evaluated to zero.
    DenominatorZero,
}

impl RatioError {
    pub(crate) const fn denominator_zero() -> RatioError {
        RatioError {
            kind: RatioErrorKind::DenominatorZero,
        }
    }

    /// Returns what went wrong.
    #[inline]
    pub const fn kind(&self) -> RatioErrorKind {
        self.kind
    }
}

impl RatioErrorKind {
    fn description(&self) -> &'static str {
        match *self {
            RatioErrorKind::DenominatorZero => "zero value denominator",
        }
    }
}

use thiserror::Error;

pub mod decode {
    use thiserror::Error;

    use crate::radix::{MAX_BASE, MIN_BASE};

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("digit string is empty")]
        Empty,
        #[error("invalid digit {digit:?} at position {position} for base {base}")]
        MalformedDigit {
            digit: char,
            position: usize,
            base: u32,
        },
        #[error(
            "base {0} outside supported range {min}..={max}",
            min = MIN_BASE,
            max = MAX_BASE
        )]
        InvalidBase(u32),
    }
}

pub mod interpolation {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("cannot interpolate an empty point set")]
        NoPoints,
        #[error("duplicate x-coordinate {0}")]
        DuplicateX(i64),
        #[error("interpolated value {0} is not an integer")]
        NonIntegralResult(String),
        #[error("floating-point estimate is not finite")]
        NonFiniteEstimate,
    }
}

pub use decode::Error as DecodeError;
pub use interpolation::Error as InterpolationError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

pub type Error = MathError;

impl DecodeError {
    /// True when the failure comes from the radix rather than the digits.
    pub fn is_base_error(&self) -> bool {
        matches!(self, DecodeError::InvalidBase(_))
    }
}

//! Positional numeral decoding into exact integers.
//!
//! Digits beyond `9` are the letters `a..=z` (case-insensitive), so the
//! supported radices are `2..=36`. Values are accumulated as [`BigInt`]s and
//! therefore have no magnitude ceiling.

use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::DecodeError;

/// Smallest supported radix.
pub const MIN_BASE: u32 = 2;
/// Largest supported radix (`0-9` followed by `a-z`).
pub const MAX_BASE: u32 = 36;

/// A validated radix in `MIN_BASE..=MAX_BASE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Radix(u32);

impl Radix {
    pub const BINARY: Self = Self(2);
    pub const DECIMAL: Self = Self(10);
    pub const HEX: Self = Self(16);

    pub fn new(base: u32) -> Result<Self, DecodeError> {
        if (MIN_BASE..=MAX_BASE).contains(&base) {
            Ok(Self(base))
        } else {
            Err(DecodeError::InvalidBase(base))
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Decode `digits` in this radix. See [`decode`].
    pub fn decode(self, digits: &str) -> Result<BigInt, DecodeError> {
        let (sign, body) = split_sign(digits);
        if body.is_empty() {
            return Err(DecodeError::Empty);
        }

        let offset = digits.len() - body.len();
        let values = body
            .chars()
            .enumerate()
            .map(|(idx, ch)| {
                ch.to_digit(self.0)
                    .map(|d| d as u8)
                    .ok_or(DecodeError::MalformedDigit {
                        digit: ch,
                        position: idx + offset,
                        base: self.0,
                    })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let magnitude = BigUint::from_radix_be(&values, self.0)
            .ok_or(DecodeError::InvalidBase(self.0))?;
        Ok(BigInt::from_biguint(sign, magnitude))
    }
}

impl TryFrom<u32> for Radix {
    type Error = DecodeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decode a positional digit string in `base` into an exact integer.
///
/// A single leading `+` or `-` is accepted. Letters are case-insensitive.
///
/// ```
/// use math::radix::decode;
/// use num_bigint::BigInt;
///
/// assert_eq!(decode("213", 4).unwrap(), BigInt::from(39));
/// assert_eq!(decode("FF", 16).unwrap(), decode("ff", 16).unwrap());
/// ```
pub fn decode(digits: &str, base: u32) -> Result<BigInt, DecodeError> {
    Radix::new(base)?.decode(digits)
}

fn split_sign(digits: &str) -> (Sign, &str) {
    if let Some(rest) = digits.strip_prefix('-') {
        (Sign::Minus, rest)
    } else if let Some(rest) = digits.strip_prefix('+') {
        (Sign::Plus, rest)
    } else {
        (Sign::Plus, digits)
    }
}

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::Num;

use crate::error::DecodeError;

/// Radix range supported by positional numeral parsing (digits 0-9, a-z).
const MIN_BASE: u32 = 2;
const MAX_BASE: u32 = 36;

/// A decoded share: one point (x, y) on the secret polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Point { x, y }
    }

    /// Decode a raw share record into a point.
    ///
    /// The key is the x-coordinate as a decimal string; the y-value is a
    /// numeral string interpreted in the stated base, case-insensitive.
    pub fn decode(
        key: &str,
        base: &str,
        value: &str,
    ) -> Result<Self, DecodeError> {
        let x = BigInt::from_str(key)
            .map_err(|_| DecodeError::MalformedKey(key.to_owned()))?;

        let radix = parse_base(base)?;

        let y = BigInt::from_str_radix(value, radix).map_err(|_| {
            DecodeError::MalformedValue {
                value: value.to_owned(),
                base: radix,
            }
        })?;

        Ok(Point { x, y })
    }
}

/// Parse the base field, itself given as a decimal string.
fn parse_base(base: &str) -> Result<u32, DecodeError> {
    base.parse::<u32>()
        .ok()
        .filter(|radix| (MIN_BASE..=MAX_BASE).contains(radix))
        .ok_or_else(|| DecodeError::MalformedBase(base.to_owned()))
}

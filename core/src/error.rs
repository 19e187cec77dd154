use num_bigint::BigInt;
use thiserror::Error;

/// Result type specialized for secret recovery operations.
pub type RecoverResult<T> = std::result::Result<T, RecoverError>;

/// Top-level error type to keep error management simple for users.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoverError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Errors raised while decoding a share record into a point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed point key {0:?}: not a base-10 integer")]
    MalformedKey(String),
    #[error("malformed base {0:?}: expected an integer in 2..=36")]
    MalformedBase(String),
    #[error("malformed value {value:?}: not a valid base-{base} numeral")]
    MalformedValue { value: String, base: u32 },
}

/// Errors raised while interpolating and tallying candidate secrets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("duplicate abscissa {0}: interpolation is degenerate")]
    DuplicateAbscissa(BigInt),
    #[error("insufficient points: need {0}, got {1}")]
    InsufficientPoints(usize, usize),
    #[error("invalid threshold {0}: at least one point must define the polynomial")]
    InvalidThreshold(usize),
}

//! Secret reconstruction from base-encoded Shamir shares.
//!
//! A share document supplies n points on a degree-(k-1) polynomial, each
//! y-value written as a numeral string in its own radix. Every k-point
//! subset is interpolated at x = 0 with exact big-integer arithmetic and
//! the most frequent result wins the plurality vote, so a minority of
//! corrupted points cannot sway the reconstructed secret.

pub mod combinations;
pub mod document;
pub mod error;
pub mod interpolate;
pub mod point;
pub mod recover;

pub use combinations::Combinations;
pub use document::{Keys, ShareDocument, ShareRecord};
pub use error::{DecodeError, RecoverError, RecoverResult, SolveError};
pub use interpolate::interpolate_at_zero;
pub use point::Point;
pub use recover::{PointSet, SecretTally};

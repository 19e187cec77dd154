use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::SolveError;
use crate::point::Point;

/// Lagrange interpolate over the given points and return f(0).
///
/// For each point i the basis weight is accumulated as an exact integer
/// numerator Π_{j≠i} (-x_j) over denominator Π_{j≠i} (x_i - x_j); the
/// term y_i * numerator / denominator uses truncating big-integer
/// division before it is added to the running sum. All arithmetic is
/// exact integer arithmetic, never floating point.
pub fn interpolate_at_zero(points: &[Point]) -> Result<BigInt, SolveError> {
    let mut sum = BigInt::zero();

    for (i, point) in points.iter().enumerate() {
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();

        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let difference = &point.x - &other.x;
            if difference.is_zero() {
                return Err(SolveError::DuplicateAbscissa(point.x.clone()));
            }
            numerator *= -&other.x;
            denominator *= difference;
        }

        sum += &point.y * numerator / denominator;
    }

    Ok(sum)
}

//! Attractiveness scoring
//!
//! Each signal (stars, forks, ...) is treated as one axis of an N-dimensional
//! space, and the score is the distance from the origin to that point:
//! `floor(sqrt(sum(x_i^2)))`.

/// Returns the truncated Euclidean norm of `signals`
///
/// Empty input scores 0 and the sign of a signal never matters. The sum
/// saturates at `u128::MAX`, so the result stays monotonic for any input.
pub fn score<I>(signals: I) -> u64
where
    I: IntoIterator,
    I::Item: Into<i128>,
{
    let sum = signals
        .into_iter()
        .map(|signal| {
            let magnitude = signal.into().unsigned_abs();
            magnitude.saturating_mul(magnitude)
        })
        .fold(0u128, u128::saturating_add);

    // isqrt(u128::MAX) < 2^64
    u64::try_from(sum.isqrt()).unwrap_or(u64::MAX)
}

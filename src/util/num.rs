/// Converts an integer operand to a real for mixed or `/` arithmetic.
///
/// Magnitudes above `2^53` round to the nearest representable `f64`, as a
/// real division of such integers would.
///
/// ## Example
/// ```
/// use pascalina::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

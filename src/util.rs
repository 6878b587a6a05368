/// Numeric conversion helpers.
///
/// Integers are promoted to reals through these helpers.
pub mod num;

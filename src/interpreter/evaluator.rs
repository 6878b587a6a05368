/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the dispatch over tree nodes and the
/// handling of statements and variable reads.
pub mod core;

/// The runtime variable store.
///
/// A single name to value mapping, written by assignments and read by
/// variable references.
pub mod environment;

/// Binary operator evaluation logic.
///
/// Applies `+`, `-`, `*`, `div` and `/` under the integer/real promotion
/// rules.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix `+` and `-`.
pub mod unary;

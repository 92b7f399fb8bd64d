/// Core evaluation logic.
///
/// Contains the result type and the recursive walk over the expression tree.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic with integer/real promotion, the integer-only modulo and
/// exponentiation.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Numeric value representation.
///
/// Defines the `Number` type produced by literals and by every evaluation
/// step, together with the promotion rule from integer to real.
pub mod core;

/// Numeric helpers.
///
/// This module provides the integer-to-real promotion used by the evaluator
/// and the exact integer power routine behind `^`.
pub mod num;

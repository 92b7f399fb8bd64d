/// Core parsing entry points.
///
/// Contains the result type, the top-level expression rule and the driver
/// that tokenizes a source string and rejects trailing input.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and power precedence levels.
pub mod binary;

/// Prefix operators and primary expressions.
///
/// Handles unary `+`/`-`, number literals and parenthesized groups.
pub mod unary;

use std::fmt;

use crate::util::num::i64_to_f64;

/// Represents a runtime numeric value.
///
/// Arithmetic between two values of the same kind stays in that kind; a mixed
/// pair is promoted to `Real` before the operator is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Number {
    /// Converts the value to an `f64`, promoting integers.
    ///
    /// Integers beyond `2^53` lose precision, exactly as a native
    /// integer-to-double conversion does.
    ///
    /// # Example
    /// ```
    /// use calcline::Number;
    ///
    /// assert_eq!(Number::Integer(3).as_real(), 3.0);
    /// assert_eq!(Number::Real(0.5).as_real(), 0.5);
    /// ```
    #[must_use]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Integer(i) => i64_to_f64(i),
            Self::Real(r) => r,
        }
    }

    /// Promotes both operands of a mixed or real pair to `f64`.
    #[must_use]
    pub fn promote_to_real(self, other: Self) -> (f64, f64) {
        (self.as_real(), other.as_real())
    }
}

/// Integers print as bare integer literals, reals use the default `f64`
/// formatting.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_kind() {
        assert_eq!(Number::Integer(-42).to_string(), "-42");
        assert_eq!(Number::Real(2.5).to_string(), "2.5");
        assert_eq!(Number::Real(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn promotion_keeps_order() {
        assert_eq!(Number::Integer(1).promote_to_real(Number::Real(2.5)), (1.0, 2.5));
        assert_eq!(Number::Real(2.5).promote_to_real(Number::Integer(1)), (2.5, 1.0));
    }
}

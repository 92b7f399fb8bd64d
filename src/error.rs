/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of the
/// input. Every one of them is a syntax error: the input is not a well-formed
/// expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression, such as division by zero or integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the full parse-then-evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// The input is not a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression is valid but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl CalcError {
    /// Returns `true` when the failure happened while parsing.
    ///
    /// # Example
    /// ```
    /// use calcline::calculate;
    ///
    /// assert!(calculate("1+").unwrap_err().is_syntax_error());
    /// assert!(!calculate("1/0").unwrap_err().is_syntax_error());
    /// ```
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

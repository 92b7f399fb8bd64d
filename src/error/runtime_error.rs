/// Represents all errors that can occur during evaluation.
///
/// Each variant carries the column of the operator that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// `%` was applied to an operand that is not an integer.
    #[error("Error at column {column}: Modulo is only defined for integer operands.")]
    ModuloOnReal {
        /// The column of the `%` operator.
        column: usize,
    },
    /// Integer division or remainder by zero.
    #[error("Error at column {column}: Division by zero.")]
    DivisionByZero {
        /// The column of the `/` or `%` operator.
        column: usize,
    },
    /// Integer arithmetic overflowed the 64-bit range.
    #[error("Error at column {column}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The column of the operator.
        column: usize,
    },
}

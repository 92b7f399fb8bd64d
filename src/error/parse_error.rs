/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input contained no tokens at all.
    #[error("Syntax error: Empty input.")]
    EmptyInput,
    /// Found a character or token that cannot start or continue an
    /// expression at this point.
    #[error("Syntax error at column {column}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The offending source text.
        token:  String,
        /// The 1-based column where the error occurred.
        column: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Syntax error: Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    #[error("Syntax error at column {column}: Expected closing parenthesis ')' for this '('.")]
    ExpectedClosingParen {
        /// The column of the unmatched `(`.
        column: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Syntax error at column {column}: Extra tokens after expression, starting at '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The 1-based column where the error occurred.
        column: usize,
    },
    /// Parentheses or prefix operators were nested past the supported depth.
    #[error("Syntax error at column {column}: Expression is nested too deeply.")]
    NestingTooDeep {
        /// The column of the token that exceeded the limit.
        column: usize,
    },
    /// The input has more tokens than the parser accepts.
    #[error("Syntax error: Expression has {count} tokens, which is too many.")]
    ExpressionTooLong {
        /// The number of tokens in the input.
        count: usize,
    },
    /// An integer literal was too large to be represented as an `i64`.
    #[error("Syntax error at column {column}: Integer literal is too large.")]
    LiteralTooLarge {
        /// The 1-based column where the literal starts.
        column: usize,
    },
}

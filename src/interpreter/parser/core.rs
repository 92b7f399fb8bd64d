use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum depth of nested parentheses and prefix operators.
pub const MAX_NESTING: usize = 256;

/// Maximum number of tokens in one expression.
///
/// The height of a syntax tree never exceeds its token count, so this also
/// bounds the recursion of evaluation, formatting and drop.
pub const MAX_TOKENS: usize = 4096;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `depth`: Current nesting of parentheses and prefix operators.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, depth)
}

/// Steps one nesting level deeper, failing past [`MAX_NESTING`].
///
/// # Parameters
/// - `depth`: The current nesting.
/// - `column`: Column of the `(` or prefix operator being entered.
pub(in crate::interpreter::parser) fn nest(depth: usize, column: usize) -> ParseResult<usize> {
    if depth >= MAX_NESTING {
        return Err(ParseError::NestingTooDeep { column });
    }
    Ok(depth + 1)
}

/// Tokenizes and parses a complete source string.
///
/// The whole input must form exactly one expression: an empty input and any
/// tokens left after the expression are both rejected.
///
/// # Errors
/// - `ParseError::EmptyInput` if the source is empty.
/// - `ParseError::ExpressionTooLong` if the source has more than
///   [`MAX_TOKENS`] tokens.
/// - `ParseError::UnexpectedTrailingTokens` if input remains after a complete
///   expression.
/// - Any lexing or grammar error from the lower levels.
///
/// # Example
/// ```
/// use calcline::{error::ParseError, interpreter::parser::core::parse_source};
///
/// assert!(parse_source("(1+2)*3").is_ok());
/// assert_eq!(parse_source(""), Err(ParseError::EmptyInput));
/// assert!(matches!(parse_source("1)"),
///                  Err(ParseError::UnexpectedTrailingTokens { column: 2, .. })));
/// ```
pub fn parse_source(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    if tokens.len() > MAX_TOKENS {
        return Err(ParseError::ExpressionTooLong { count: tokens.len() });
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    if let Some((token, column)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:  token.to_string(),
                                                          column: *column, });
    }

    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nesting_at_the_limit_is_accepted() {
        let source = format!("{}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert!(parse_source(&source).is_ok());

        let source = format!("{}1", "-".repeat(MAX_NESTING));
        assert!(parse_source(&source).is_ok());
    }

    #[test]
    fn nesting_past_the_limit_is_rejected() {
        let source = format!("{}1{}", "(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
        assert_eq!(parse_source(&source),
                   Err(ParseError::NestingTooDeep { column: MAX_NESTING + 1 }));

        let source = format!("2*{}1", "+-".repeat(MAX_NESTING));
        assert_eq!(parse_source(&source),
                   Err(ParseError::NestingTooDeep { column: MAX_NESTING + 3 }));
    }

    #[test]
    fn token_count_is_bounded() {
        let source = format!("1{}", "+1".repeat((MAX_TOKENS - 1) / 2));
        assert!(parse_source(&source).is_ok());

        let source = format!("1{}", "+1".repeat(MAX_TOKENS / 2));
        assert_eq!(parse_source(&source),
                   Err(ParseError::ExpressionTooLong { count: MAX_TOKENS + 1 }));
    }
}

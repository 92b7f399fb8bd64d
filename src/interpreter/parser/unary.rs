use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, nest, parse_expression},
        value::core::Number,
    },
};

/// Parses a prefix expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (identity, produces no node)
///
/// Prefix operators are right-associative and may be stacked, so an input
/// like `-+-5` is parsed as `-(-5)`. If no prefix operator is present, the
/// function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     prefix := ("+" | "-") prefix
///             | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting of parentheses and prefix operators.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
///
/// # Errors
/// - `NestingTooDeep` once more than
///   [`MAX_NESTING`](crate::interpreter::parser::core::MAX_NESTING) prefix
///   operators and parentheses are open at the same time.
pub(crate) fn parse_prefix<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Minus, column)) => {
            let depth = nest(depth, *column)?;
            tokens.next();
            let expr = parse_prefix(tokens, depth)?;
            Ok(Expr::UnaryOp { op:     UnaryOperator::Negate,
                               expr:   Box::new(expr),
                               column: *column, })
        },
        Some((Token::Plus, column)) => {
            let depth = nest(depth, *column)?;
            tokens.next();
            parse_prefix(tokens, depth)
        },
        _ => parse_primary(tokens, depth),
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are number literals and parenthesized expressions.
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current nesting of parentheses and prefix operators.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the tokens run out where an operand is
///   required.
/// - `UnexpectedToken` if the next token cannot start an operand.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        (Token::Integer(..) | Token::Real(..), _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens, depth),
        (tok, column) => Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                                           column: *column, }),
    }
}

/// Parses a number literal into an [`Expr::Literal`].
///
/// Integer tokens become `Number::Integer`, real tokens `Number::Real`.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(v), column)) => Ok(Expr::Literal { value:  Number::from(*v),
                                                                column: *column, }),
        Some((Token::Real(v), column)) => Ok(Expr::Literal { value:  Number::from(*v),
                                                             column: *column, }),
        Some((tok, column)) => Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                                                 column: *column, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a parenthesized expression `( expr )`.
///
/// The grouping produces no node of its own; it only overrides precedence.
///
/// # Errors
/// - `ExpectedClosingParen` if the matching `)` is missing. The error points
///   at the opening parenthesis.
/// - `NestingTooDeep` if this group is nested past
///   [`MAX_NESTING`](crate::interpreter::parser::core::MAX_NESTING).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let column = match tokens.next() {
        Some((Token::LParen, column)) => *column,
        Some((tok, column)) => {
            return Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                                     column: *column, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    let depth = nest(depth, column)?;
    let expr = parse_expression(tokens, depth)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { column }),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::Expr,
        error::ParseError,
        interpreter::{parser::core::parse_source, value::core::Number},
    };

    #[test]
    fn literal_kinds() {
        assert_eq!(parse_source("7").unwrap(),
                   Expr::Literal { value:  Number::Integer(7),
                                   column: 1, });
        assert_eq!(parse_source("7.5").unwrap(),
                   Expr::Literal { value:  Number::Real(7.5),
                                   column: 1, });
        assert_eq!(parse_source("7e1").unwrap(),
                   Expr::Literal { value:  Number::Real(70.0),
                                   column: 1, });
    }

    #[test]
    fn prefix_operators_stack() {
        assert_eq!(parse_source("--5").unwrap().to_string(), "(-(-5))");
        assert_eq!(parse_source("+5").unwrap().to_string(), "5");
        assert_eq!(parse_source("-+-5").unwrap().to_string(), "(-(-5))");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(parse_source("(1+2)*3").unwrap().to_string(), "((1 + 2) * 3)");
        assert_eq!(parse_source("((4))").unwrap().to_string(), "4");
        assert_eq!(parse_source("-(1-2)").unwrap().to_string(), "(-(1 - 2))");
    }

    #[test]
    fn unclosed_group_points_at_open_paren() {
        assert_eq!(parse_source("1+(2*3"),
                   Err(ParseError::ExpectedClosingParen { column: 3 }));
        assert_eq!(parse_source("(1+2"),
                   Err(ParseError::ExpectedClosingParen { column: 1 }));
    }

    #[test]
    fn missing_operand() {
        assert_eq!(parse_source("1+"), Err(ParseError::UnexpectedEndOfInput));
        assert_eq!(parse_source("-"), Err(ParseError::UnexpectedEndOfInput));
        assert_eq!(parse_source("("), Err(ParseError::UnexpectedEndOfInput));
        assert_eq!(parse_source("()"),
                   Err(ParseError::UnexpectedToken { token:  ")".to_string(),
                                                     column: 2, }));
        assert_eq!(parse_source("*2"),
                   Err(ParseError::UnexpectedToken { token:  "*".to_string(),
                                                     column: 1, }));
    }
}

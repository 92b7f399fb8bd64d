use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_prefix},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `depth`: Current nesting of parentheses and prefix operators.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, column)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    column: *column };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := power (("*" | "/" | "%") power)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `depth`: Current nesting of parentheses and prefix operators.
///
/// # Returns
/// A binary expression tree combining power-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_power(tokens, depth)?;
    loop {
        if let Some((token, column)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_power(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    column: *column };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Repeated `^` is folded left to right, so `a ^ b ^ c` parses as
/// `(a ^ b) ^ c`. Each operand is a prefix expression, which makes `-2 ^ 2`
/// parse as `(-2) ^ 2`.
///
/// The rule is: `power := prefix ("^" prefix)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Current nesting of parentheses and prefix operators.
///
/// # Returns
/// An exponentiation expression tree.
///
/// # Example
/// ```
/// use calcline::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::binary::parse_power},
/// };
///
/// let tokens = tokenize("2^3^2").unwrap();
/// let expr = parse_power(&mut tokens.iter().peekable(), 0).unwrap();
///
/// // The outermost node is the second `^`, at column 4.
/// assert!(matches!(expr,
///                  Expr::BinaryOp { op: BinaryOperator::Pow, column: 4, .. }));
/// ```
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_prefix(tokens, depth)?;
    while let Some((token, column)) = tokens.peek() {
        if let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Pow)
        {
            tokens.next();
            let right = parse_prefix(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    column: *column };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `%`, `^`) and `None` for all other tokens.
///
/// # Example
/// ```
/// use calcline::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::{ast::BinaryOperator, interpreter::parser::core::parse_source};

    fn tree(source: &str) -> String {
        parse_source(source).unwrap().to_string()
    }

    #[test]
    fn multiplicative_binds_tighter_than_additive() {
        assert_eq!(tree("2+3*4"), "(2 + (3 * 4))");
        assert_eq!(tree("2*3+4"), "((2 * 3) + 4)");
        assert_eq!(tree("8%3-1"), "((8 % 3) - 1)");
    }

    #[test]
    fn same_level_is_left_associative() {
        assert_eq!(tree("1-2-3"), "((1 - 2) - 3)");
        assert_eq!(tree("8/4/2"), "((8 / 4) / 2)");
        assert_eq!(tree("2^3^2"), "((2 ^ 3) ^ 2)");
    }

    #[test]
    fn power_binds_tighter_than_multiplicative() {
        assert_eq!(tree("2*3^2"), "(2 * (3 ^ 2))");
        assert_eq!(tree("2^3*2"), "((2 ^ 3) * 2)");
    }

    #[test]
    fn power_operand_may_carry_a_sign() {
        assert_eq!(tree("2^-1"), "(2 ^ (-1))");
        assert_eq!(tree("-2^2"), "((-2) ^ 2)");
    }

    #[test]
    fn binary_nodes_record_operator_column() {
        match parse_source("10+2").unwrap() {
            crate::ast::Expr::BinaryOp { op, column, .. } => {
                assert_eq!(op, BinaryOperator::Add);
                assert_eq!(column, 3);
            },
            other => panic!("expected a binary node, got {other:?}"),
        }
    }
}

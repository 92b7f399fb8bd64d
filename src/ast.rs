use std::fmt;

use crate::interpreter::value::core::Number;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Each non-leaf node owns its children through a `Box`, so a tree is acyclic
/// by construction and is dropped top-down with its root. Trees are built
/// bottom-up by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value:  Number,
        /// Column of the literal in the source.
        column: usize,
    },
    /// A prefix operator applied to one operand.
    UnaryOp {
        /// The operator.
        op:     UnaryOperator,
        /// The operand.
        expr:   Box<Self>,
        /// Column of the operator in the source.
        column: usize,
    },
    /// A binary operator applied to two operands.
    BinaryOp {
        /// The left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// The right operand.
        right:  Box<Self>,
        /// Column of the operator in the source.
        column: usize,
    },
}

/// Supported prefix operators.
///
/// Unary `+` is accepted by the parser but produces no node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
}

/// Supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => f.write_str("-"),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        f.write_str(symbol)
    }
}

/// Renders the tree fully parenthesized, so grouping is explicit.
///
/// # Example
/// ```
/// use calcline::parse;
///
/// let expr = parse("2^3^2").unwrap();
/// assert_eq!(expr.to_string(), "((2 ^ 3) ^ 2)");
///
/// let expr = parse("-2^2").unwrap();
/// assert_eq!(expr.to_string(), "((-2) ^ 2)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

//! # calcline
//!
//! calcline evaluates a single-line arithmetic expression such as
//! `(1+2)*3^2` and returns an integer or real result.
//!
//! The grammar supports `+ - * / % ^`, unary `+`/`-` and parentheses over
//! integer and real literals. Whitespace is not part of the grammar. `^` is
//! left-associative and binds looser than unary minus, so `2^3^2` is `64` and
//! `-2^2` is `4`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// an expression as a tree. The AST is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines the literal, unary and binary node kinds.
/// - Attaches source columns to nodes for error reporting.
/// - Renders trees in fully parenthesized form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression, each with the column it refers to.
///
/// # Responsibilities
/// - Defines error enums for both failure channels (syntax and runtime).
/// - Combines them into `CalcError` for the full pipeline.
pub mod error;
/// Orchestrates the phases of evaluation.
///
/// This module ties together lexing, parsing, evaluation and the value type.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// # Responsibilities
/// - Promote `i64` to `f64`.
/// - Compute exact integer powers.
pub mod util;

pub use crate::{
    ast::Expr,
    error::{CalcError, ParseError, RuntimeError},
    interpreter::value::core::Number,
};

/// Parses an expression into its syntax tree.
///
/// # Errors
/// Returns a `ParseError` if the input is not exactly one well-formed
/// expression.
///
/// # Examples
/// ```
/// use calcline::parse;
///
/// let expr = parse("2+3*4").unwrap();
/// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
///
/// assert!(parse("1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let expr = interpreter::parser::core::parse_source(source)?;
    tracing::debug!(tree = %expr, "parsed expression");
    Ok(expr)
}

/// Evaluates a parsed expression.
///
/// # Errors
/// Returns a `RuntimeError` for integer division by zero, integer overflow,
/// or modulo with a real operand.
///
/// # Examples
/// ```
/// use calcline::{Number, evaluate, parse};
///
/// let expr = parse("10/3").unwrap();
/// assert_eq!(evaluate(&expr), Ok(Number::Integer(3)));
/// ```
pub fn evaluate(expr: &Expr) -> Result<Number, RuntimeError> {
    let value = interpreter::evaluator::core::eval(expr)?;
    tracing::debug!(%value, "evaluated expression");
    Ok(value)
}

/// Parses and evaluates an expression, returning its numeric result.
///
/// The call has no hidden state: the same input always produces the same
/// result.
///
/// # Errors
/// Returns `CalcError::Parse` for a syntax error and `CalcError::Runtime` for
/// a failure during evaluation.
///
/// # Examples
/// ```
/// use calcline::{CalcError, Number, RuntimeError, calculate};
///
/// assert_eq!(calculate("2^3^2"), Ok(Number::Integer(64)));
/// assert_eq!(calculate("7%2"), Ok(Number::Integer(1)));
///
/// // Modulo is integer-only.
/// assert_eq!(calculate("7.0%2"),
///            Err(CalcError::Runtime(RuntimeError::ModuloOnReal { column: 4 })));
///
/// // Syntax errors never yield a partial result.
/// assert!(calculate("(1+2").unwrap_err().is_syntax_error());
/// ```
#[tracing::instrument(level = "debug", err(level = "debug", Display))]
pub fn calculate(source: &str) -> Result<Number, CalcError> {
    let expr = parse(source)?;
    Ok(evaluate(&expr)?)
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use tracing::Level;

    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged_at(level: Level, source: &str) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt().with_max_level(level)
                                                  .with_ansi(false)
                                                  .with_writer(move || writer.clone())
                                                  .finish();
        tracing::subscriber::with_default(subscriber, || {
            let _ = calculate(source);
        });
        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn failed_calculations_log_at_debug() {
        assert!(logged_at(Level::INFO, "1+").is_empty());
        assert!(logged_at(Level::INFO, "1/0").is_empty());

        let debug = logged_at(Level::DEBUG, "1+");
        assert!(debug.contains("DEBUG"));
        assert!(debug.contains("Syntax error"));
        assert!(!debug.contains("ERROR"));
    }
}

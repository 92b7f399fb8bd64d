use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::eval_binary, unary::eval_unary},
        value::core::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting number.
///
/// Children are evaluated left to right before their parent operator is
/// applied. The first failing operator aborts the walk.
///
/// # Example
/// ```
/// use calcline::{Number, interpreter::evaluator::core::eval, parse};
///
/// let expr = parse("(1+2)*3").unwrap();
/// assert_eq!(eval(&expr), Ok(Number::Integer(9)));
/// ```
pub fn eval(expr: &Expr) -> EvalResult<Number> {
    match expr {
        Expr::Literal { value, .. } => Ok(*value),
        Expr::UnaryOp { op, expr, column } => {
            let value = eval(expr)?;
            eval_unary(*op, value, *column)
        },
        Expr::BinaryOp { left,
                         op,
                         right,
                         column, } => {
            let left = eval(left)?;
            let right = eval(right)?;
            eval_binary(*op, left, right, *column)
        },
    }
}

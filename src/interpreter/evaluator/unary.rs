use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Number},
};

/// Evaluates a unary operation on a value.
///
/// Negation keeps the numeric kind of its operand. Negating `i64::MIN` has no
/// integer result and is reported as overflow.
///
/// # Example
/// ```
/// use calcline::{Number, ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, Number::Integer(5), 1),
///            Ok(Number::Integer(-5)));
/// assert_eq!(eval_unary(UnaryOperator::Negate, Number::Real(0.5), 1),
///            Ok(Number::Real(-0.5)));
/// ```
pub fn eval_unary(op: UnaryOperator, value: Number, column: usize) -> EvalResult<Number> {
    match op {
        UnaryOperator::Negate => match value {
            Number::Integer(n) => n.checked_neg()
                                   .map(Number::Integer)
                                   .ok_or(RuntimeError::Overflow { column }),
            Number::Real(r) => Ok(Number::Real(-r)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negating_minimum_integer_overflows() {
        assert_eq!(eval_unary(UnaryOperator::Negate, Number::Integer(i64::MIN), 3),
                   Err(RuntimeError::Overflow { column: 3 }));
    }
}

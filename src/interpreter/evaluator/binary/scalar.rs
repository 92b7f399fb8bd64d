use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Number},
};

/// Evaluates a scalar arithmetic operation.
///
/// Two integers stay integers; the operation is checked and overflow is
/// reported instead of wrapping. Integer division truncates toward zero. As
/// soon as one operand is real, both are promoted and the operation follows
/// IEEE-754, so real division by zero yields an infinity or NaN. The operator
/// must be one of `Add`, `Sub`, `Mul` or `Div`.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `column`: Column of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<Number>` containing the computed scalar.
///
/// Only reachable through `eval_binary`, which routes `Mod` and `Pow`
/// elsewhere.
pub(crate) fn eval_scalar_op(op: BinaryOperator,
                      left: Number,
                      right: Number,
                      column: usize)
                      -> EvalResult<Number> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Number::{Integer, Real};

    match (left, right) {
        (Integer(a), Integer(b)) => {
            let result = match op {
                Add => a.checked_add(b),
                Sub => a.checked_sub(b),
                Mul => a.checked_mul(b),
                Div => {
                    if b == 0 {
                        return Err(RuntimeError::DivisionByZero { column });
                    }
                    a.checked_div(b)
                },
                _ => unreachable!(),
            };
            result.map(Integer)
                  .ok_or(RuntimeError::Overflow { column })
        },
        _ => {
            let (left, right) = left.promote_to_real(right);

            Ok(Real(match op {
                        Add => left + right,
                        Sub => left - right,
                        Mul => left * right,
                        Div => left / right,
                        _ => unreachable!(),
                    }))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use BinaryOperator::{Add, Div, Mul, Sub};
    use Number::{Integer, Real};

    #[test]
    fn integer_pairs_stay_integer() {
        assert_eq!(eval_scalar_op(Add, Integer(2), Integer(3), 1), Ok(Integer(5)));
        assert_eq!(eval_scalar_op(Sub, Integer(2), Integer(3), 1), Ok(Integer(-1)));
        assert_eq!(eval_scalar_op(Mul, Integer(-4), Integer(3), 1), Ok(Integer(-12)));
        assert_eq!(eval_scalar_op(Div, Integer(-7), Integer(2), 1), Ok(Integer(-3)));
    }

    #[test]
    fn mixed_pairs_promote() {
        assert_eq!(eval_scalar_op(Add, Integer(2), Real(0.5), 1), Ok(Real(2.5)));
        assert_eq!(eval_scalar_op(Sub, Real(0.5), Integer(2), 1), Ok(Real(-1.5)));
        assert_eq!(eval_scalar_op(Div, Real(1.0), Integer(4), 1), Ok(Real(0.25)));
        assert_eq!(eval_scalar_op(Div, Integer(1), Real(4.0), 1), Ok(Real(0.25)));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(eval_scalar_op(Div, Integer(1), Integer(0), 2),
                   Err(RuntimeError::DivisionByZero { column: 2 }));
        assert_eq!(eval_scalar_op(Div, Real(1.0), Integer(0), 2),
                   Ok(Real(f64::INFINITY)));
        assert_eq!(eval_scalar_op(Div, Integer(-1), Real(0.0), 2),
                   Ok(Real(f64::NEG_INFINITY)));
    }

    #[test]
    fn integer_overflow_is_reported() {
        assert_eq!(eval_scalar_op(Add, Integer(i64::MAX), Integer(1), 5),
                   Err(RuntimeError::Overflow { column: 5 }));
        assert_eq!(eval_scalar_op(Mul, Integer(i64::MAX), Integer(2), 5),
                   Err(RuntimeError::Overflow { column: 5 }));
        assert_eq!(eval_scalar_op(Div, Integer(i64::MIN), Integer(-1), 5),
                   Err(RuntimeError::Overflow { column: 5 }));
    }
}

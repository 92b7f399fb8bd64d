use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{power::eval_pow, scalar::eval_scalar_op},
            core::EvalResult,
        },
        value::core::Number,
    },
};

/// Evaluates a binary operation between two values.
///
/// Arithmetic operators are routed to `eval_scalar_op`, power to `eval_pow`.
/// Modulo is only defined when both operands are integers; it truncates like
/// integer division, so the sign of the result follows the dividend.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `column`: Column of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<Number>` containing the evaluated result.
///
/// # Example
/// ```
/// use calcline::{
///     Number, ast::BinaryOperator, error::RuntimeError,
///     interpreter::evaluator::binary::core::eval_binary,
/// };
///
/// let result = eval_binary(BinaryOperator::Add, Number::Integer(3), Number::Integer(4), 2);
/// assert_eq!(result, Ok(Number::Integer(7)));
///
/// let result = eval_binary(BinaryOperator::Mod, Number::Real(7.0), Number::Integer(2), 4);
/// assert_eq!(result, Err(RuntimeError::ModuloOnReal { column: 4 }));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Number,
                   right: Number,
                   column: usize)
                   -> EvalResult<Number> {
    use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};
    use Number::Integer;

    match op {
        Add | Sub | Mul | Div => eval_scalar_op(op, left, right, column),

        Mod => match (left, right) {
            (Integer(_), Integer(0)) => Err(RuntimeError::DivisionByZero { column }),
            (Integer(a), Integer(b)) => a.checked_rem(b)
                                         .map(Integer)
                                         .ok_or(RuntimeError::Overflow { column }),
            _ => Err(RuntimeError::ModuloOnReal { column }),
        },

        Pow => eval_pow(left, right, column),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulo_sign_follows_dividend() {
        use BinaryOperator::Mod;
        use Number::Integer;

        assert_eq!(eval_binary(Mod, Integer(7), Integer(2), 1), Ok(Integer(1)));
        assert_eq!(eval_binary(Mod, Integer(-7), Integer(2), 1), Ok(Integer(-1)));
        assert_eq!(eval_binary(Mod, Integer(7), Integer(-2), 1), Ok(Integer(1)));
    }

    #[test]
    fn modulo_edge_cases() {
        use BinaryOperator::Mod;
        use Number::{Integer, Real};

        assert_eq!(eval_binary(Mod, Integer(7), Integer(0), 3),
                   Err(RuntimeError::DivisionByZero { column: 3 }));
        assert_eq!(eval_binary(Mod, Integer(i64::MIN), Integer(-1), 3),
                   Err(RuntimeError::Overflow { column: 3 }));
        assert_eq!(eval_binary(Mod, Integer(7), Real(2.0), 3),
                   Err(RuntimeError::ModuloOnReal { column: 3 }));
        assert_eq!(eval_binary(Mod, Real(7.0), Real(2.0), 3),
                   Err(RuntimeError::ModuloOnReal { column: 3 }));
    }

    #[test]
    fn every_operator_accepts_every_kind_pair() {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};
        use Number::{Integer, Real};

        let operands = [Integer(6), Integer(0), Integer(-2), Real(1.5), Real(0.0)];
        for op in [Add, Sub, Mul, Div, Mod, Pow] {
            for left in operands {
                for right in operands {
                    // Every combination yields a value or an error.
                    let _ = eval_binary(op, left, right, 1);
                }
            }
        }

        assert_eq!(eval_binary(Mul, Integer(6), Real(1.5), 1), Ok(Real(9.0)));
        assert_eq!(eval_binary(Pow, Integer(-2), Integer(3), 1), Ok(Integer(-8)));
        assert_eq!(eval_binary(Sub, Real(0.0), Integer(6), 1), Ok(Real(-6.0)));
    }
}

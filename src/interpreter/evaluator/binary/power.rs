use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Number},
    util::num::checked_pow_int,
};

/// Evaluates an exponentiation operation.
///
/// An integer base with a non-negative integer exponent is computed exactly
/// with `checked_pow_int`. A negative integer exponent, or any real operand,
/// promotes both sides and uses `powf`, giving a real result.
///
/// # Parameters
/// - `base`: The base value.
/// - `exponent`: The exponent value.
/// - `column`: Column of the `^` operator, for error reporting.
///
/// # Returns
/// An `EvalResult<Number>` containing the result of `base ^ exponent`.
///
/// # Example
/// ```
/// use calcline::{Number, interpreter::evaluator::binary::power::eval_pow};
///
/// assert_eq!(eval_pow(Number::Integer(2), Number::Integer(10), 1),
///            Ok(Number::Integer(1024)));
/// assert_eq!(eval_pow(Number::Integer(2), Number::Integer(-1), 1),
///            Ok(Number::Real(0.5)));
/// ```
pub fn eval_pow(base: Number, exponent: Number, column: usize) -> EvalResult<Number> {
    use Number::{Integer, Real};

    match (base, exponent) {
        (Integer(b), Integer(e)) if e >= 0 => {
            let e = e.unsigned_abs();
            checked_pow_int(b, e).map(Integer)
                                 .ok_or(RuntimeError::Overflow { column })
        },
        _ => {
            let (b, e) = base.promote_to_real(exponent);
            Ok(Real(b.powf(e)))
        },
    }
}

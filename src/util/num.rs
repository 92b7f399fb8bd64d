/// Converts an `i64` to `f64` the way a native numeric promotion does.
///
/// Values beyond `2^53` in magnitude round to the nearest representable
/// double.
///
/// ## Example
/// ```
/// use calcline::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Computes `base^exponent` exactly by exponentiation by squaring.
///
/// `pow(a, 0) = 1`; otherwise `t = pow(a, p / 2)` and the result is `t * t`,
/// times `a` once more when `p` is odd. This takes `O(log p)`
/// multiplications. Negative exponents cannot be expressed here; callers route
/// them to the floating-point path.
///
/// ## Returns
/// - `Some(i64)`: the exact power.
/// - `None`: if any intermediate product overflows `i64`.
///
/// ## Example
/// ```
/// use calcline::util::num::checked_pow_int;
///
/// assert_eq!(checked_pow_int(2, 10), Some(1024));
/// assert_eq!(checked_pow_int(-3, 3), Some(-27));
/// assert_eq!(checked_pow_int(7, 0), Some(1));
/// assert_eq!(checked_pow_int(2, 64), None);
/// ```
#[must_use]
pub fn checked_pow_int(base: i64, exponent: u64) -> Option<i64> {
    if exponent == 0 {
        return Some(1);
    }

    let half = checked_pow_int(base, exponent / 2)?;
    let squared = half.checked_mul(half)?;
    if exponent % 2 == 0 {
        Some(squared)
    } else {
        squared.checked_mul(base)
    }
}

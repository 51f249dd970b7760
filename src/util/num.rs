use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// Integer-valued builtins and the bitwise operators all read their operands
/// through this function, so a fractional operand such as `7.9` is treated as
/// `7` and `-7.9` as `-7`.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
/// - `what`: Name of the operation, used in error messages.
///
/// # Returns
/// - `Ok(i64)`: The truncated value.
/// - `Err(RuntimeError::Domain)`: If the value is NaN or infinite.
/// - `Err(RuntimeError::Overflow)`: If the truncated value does not fit.
///
/// # Example
/// ```
/// use multicalc::{error::RuntimeError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(7.9, "gcd").unwrap(), 7);
/// assert_eq!(f64_to_i64_truncated(-7.9, "gcd").unwrap(), -7);
///
/// let err = f64_to_i64_truncated(1e30, "gcd").unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64, what: &str) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::Domain { details: format!("{what} cannot use non-finite value {value}") });
    }
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow { details: format!("{value} does not fit in a 64-bit integer for {what}") });
    }
    Ok(truncated as i64)
}

/// Converts an `f64` to `usize` if it is finite, non-negative and integral.
///
/// Used for sizes such as the `rows` and `cols` arguments of `matrix`.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
/// - `what`: Description of the quantity, used in error messages.
///
/// # Returns
/// - `Ok(usize)`: The converted value.
/// - `Err(RuntimeError::InvalidArgument)`: If the value is not a valid size.
///
/// # Example
/// ```
/// use multicalc::util::num::f64_to_usize_checked;
///
/// assert_eq!(f64_to_usize_checked(3.0, "rows").unwrap(), 3);
/// assert!(f64_to_usize_checked(-1.0, "rows").is_err());
/// assert!(f64_to_usize_checked(2.5, "rows").is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_usize_checked(value: f64, what: &str) -> EvalResult<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= usize::MAX as f64 {
        return Err(RuntimeError::invalid_argument(format!("{what} must be a non-negative integer, got {value}")));
    }
    Ok(value as usize)
}

/// Converts an `i64` to `f64`. Magnitudes above `2^53` round to the nearest
/// representable value.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a count to `f64`, used for means and other averages.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Converts an unsigned integer result such as a gcd or lcm to `f64`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn u64_to_f64(value: u64) -> f64 {
    value as f64
}

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Greatest common divisor of `|a|` and `|b|` by the Euclidean algorithm.
///
/// `gcd(0, 0)` is `0`. The result is unsigned because `gcd(i64::MIN, 0)` is
/// `2^63`.
///
/// # Example
/// ```
/// use multicalc::domain::discrete::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(-12, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// ```
#[must_use]
pub const fn gcd(a: i64, b: i64) -> u64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple of `|a|` and `|b|`; `0` if either operand is `0`.
///
/// `|a|` is divided by the gcd before multiplying by `|b|`.
///
/// # Returns
/// - `Ok(u64)`: The least common multiple.
/// - `Err(RuntimeError::Overflow)`: If it does not fit in 64 bits.
pub fn lcm(a: i64, b: i64) -> EvalResult<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let divisor = gcd(a, b);
    (a.unsigned_abs() / divisor).checked_mul(b.unsigned_abs())
                                .ok_or_else(|| RuntimeError::Overflow { details: format!("lcm({a}, {b}) exceeds 64 bits") })
}

/// Remainder of `a` modulo `m`, normalized into `[0, |m|)`.
///
/// # Returns
/// - `Ok(i64)`: The normalized remainder.
/// - `Err(RuntimeError::DivisionByZero)`: If `m` is `0`.
///
/// # Example
/// ```
/// use multicalc::domain::discrete::modulo;
///
/// assert_eq!(modulo(-7, 3).unwrap(), 2);
/// assert_eq!(modulo(7, -3).unwrap(), 1);
/// assert!(modulo(1, 0).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn modulo(a: i64, m: i64) -> EvalResult<i64> {
    if m == 0 {
        return Err(RuntimeError::division_by_zero("mod with modulus 0"));
    }
    // The result is below |m| <= 2^63, so it always fits back into i64.
    Ok(i128::from(a).rem_euclid(i128::from(m).abs()) as i64)
}

/// Computes `base^exp mod |m|` by repeated squaring.
///
/// Intermediate products are 128-bit, so no modulus can overflow.
///
/// # Returns
/// - `Ok(i64)`: The result in `[0, |m|)`; `0` when `|m| == 1`.
/// - `Err(RuntimeError::DivisionByZero)`: If `m` is `0`.
/// - `Err(RuntimeError::InvalidArgument)`: If `exp` is negative.
///
/// # Example
/// ```
/// use multicalc::domain::discrete::modpow;
///
/// assert_eq!(modpow(2, 10, 1000).unwrap(), 24);
/// assert_eq!(modpow(5, 3, 1).unwrap(), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn modpow(base: i64, exp: i64, m: i64) -> EvalResult<i64> {
    if m == 0 {
        return Err(RuntimeError::division_by_zero("modpow with modulus 0"));
    }
    let modulus = i128::from(m).abs();
    if modulus == 1 {
        return Ok(0);
    }
    if exp < 0 {
        return Err(RuntimeError::invalid_argument("modpow does not support negative exponents"));
    }

    let mut result: i128 = 1;
    let mut base = i128::from(base).rem_euclid(modulus);
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        exp >>= 1;
        base = base * base % modulus;
    }
    Ok(result as i64)
}

/// Primality test by trial division with the 6k ± 1 skip.
///
/// Every `n < 2` is not prime.
///
/// # Example
/// ```
/// use multicalc::domain::discrete::is_prime;
///
/// assert!(is_prime(97));
/// assert!(!is_prime(91));
/// assert!(!is_prime(-7));
/// ```
#[must_use]
pub const fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i: i64 = 5;
    // i <= n / i avoids overflowing i * i near i64::MAX.
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(i64::MIN, 0), 1 << 63);
        assert_eq!(lcm(4, 6).unwrap(), 12);
        assert_eq!(lcm(-4, 6).unwrap(), 12);
        assert_eq!(lcm(0, 9).unwrap(), 0);
        assert!(matches!(lcm(i64::MAX, i64::MAX - 1), Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn modulo_is_non_negative() {
        assert_eq!(modulo(10, 3).unwrap(), 1);
        assert_eq!(modulo(-10, 3).unwrap(), 2);
        assert_eq!(modulo(-9, 3).unwrap(), 0);
        assert_eq!(modulo(i64::MIN, i64::MIN).unwrap(), 0);
        assert_eq!(modulo(-1, i64::MIN).unwrap(), i64::MAX);
        assert!(matches!(modulo(5, 0), Err(RuntimeError::DivisionByZero { .. })));
    }

    #[test]
    fn modpow_cases() {
        assert_eq!(modpow(3, 0, 7).unwrap(), 1);
        assert_eq!(modpow(-2, 3, 5).unwrap(), 2);
        assert_eq!(modpow(i64::MAX, i64::MAX, i64::MAX - 1).unwrap(), 1);
        assert!(matches!(modpow(2, 3, 0), Err(RuntimeError::DivisionByZero { .. })));
        assert!(matches!(modpow(2, -1, 5), Err(RuntimeError::InvalidArgument { .. })));
    }

    #[test]
    fn small_primes() {
        let primes: Vec<i64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
    }
}

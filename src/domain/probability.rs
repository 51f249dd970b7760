use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64,
};

/// Largest `n` whose factorial is finite in `f64`.
pub const MAX_FACTORIAL: i64 = 170;

/// Computes `n!` as a float.
///
/// # Returns
/// - `Ok(f64)`: The factorial.
/// - `Err(RuntimeError::InvalidArgument)`: If `n < 0`.
/// - `Err(RuntimeError::Overflow)`: If `n > 170`.
///
/// # Example
/// ```
/// use multicalc::domain::probability::factorial;
///
/// assert_eq!(factorial(0).unwrap(), 1.0);
/// assert_eq!(factorial(10).unwrap(), 3_628_800.0);
/// assert!(factorial(171).is_err());
/// ```
pub fn factorial(n: i64) -> EvalResult<f64> {
    if n < 0 {
        return Err(RuntimeError::invalid_argument(format!("factorial of negative number {n}")));
    }
    if n > MAX_FACTORIAL {
        return Err(RuntimeError::Overflow { details: format!("{n}! is too large") });
    }
    Ok((2..=n).fold(1.0, |acc, i| acc * i64_to_f64(i)))
}

/// Number of ways to choose `r` items out of `n`, without order.
///
/// Computed as a running product of `(n - i) / (i + 1)` over the smaller of
/// `r` and `n - r`.
///
/// # Returns
/// - `Ok(f64)`: The binomial coefficient.
/// - `Err(RuntimeError::InvalidArgument)`: If `n` or `r` is negative or
///   `r > n`.
/// - `Err(RuntimeError::Overflow)`: If the result is not finite.
pub fn ncr(n: i64, r: i64) -> EvalResult<f64> {
    check_selection("nCr", n, r)?;
    let r = r.min(n - r);
    let mut result = 1.0;
    for i in 0..r {
        result *= i64_to_f64(n - i) / i64_to_f64(i + 1);
        if result.is_infinite() {
            return Err(overflow("nCr", n, r));
        }
    }
    Ok(result)
}

/// Number of ordered selections of `r` items out of `n`.
///
/// # Returns
/// - `Ok(f64)`: `n! / (n - r)!`.
/// - `Err(RuntimeError::InvalidArgument)`: If `n` or `r` is negative or
///   `r > n`.
/// - `Err(RuntimeError::Overflow)`: If the result is not finite.
pub fn npr(n: i64, r: i64) -> EvalResult<f64> {
    check_selection("nPr", n, r)?;
    let mut result = 1.0;
    for i in 0..r {
        result *= i64_to_f64(n - i);
        if result.is_infinite() {
            return Err(overflow("nPr", n, r));
        }
    }
    Ok(result)
}

/// Probability of exactly `k` successes in `n` trials with success
/// probability `p`: `C(n, k) * p^k * (1 - p)^(n - k)`.
///
/// # Returns
/// - `Ok(f64)`: The probability.
/// - `Err(RuntimeError::InvalidArgument)`: If `n` or `k` is negative,
///   `k > n`, or `p` is outside `[0, 1]`.
///
/// # Example
/// ```
/// use multicalc::domain::probability::binomial;
///
/// assert_eq!(binomial(2, 0.5, 1).unwrap(), 0.5);
/// assert!(binomial(2, 1.5, 1).is_err());
/// ```
pub fn binomial(n: i64, p: f64, k: i64) -> EvalResult<f64> {
    if n < 0 || k < 0 {
        return Err(RuntimeError::invalid_argument("binomial requires non-negative n and k"));
    }
    if k > n {
        return Err(RuntimeError::invalid_argument(format!("binomial requires k <= n, got k = {k}, n = {n}")));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(RuntimeError::invalid_argument(format!("probability {p} is outside [0, 1]")));
    }
    let coefficient = ncr(n, k)?;
    Ok(coefficient * p.powf(i64_to_f64(k)) * (1.0 - p).powf(i64_to_f64(n - k)))
}

/// Probability that the first success happens on trial `k`:
/// `(1 - p)^(k - 1) * p`.
///
/// # Returns
/// - `Ok(f64)`: The probability.
/// - `Err(RuntimeError::InvalidArgument)`: If `k < 1` or `p` is outside
///   `(0, 1]`.
pub fn geometric(p: f64, k: i64) -> EvalResult<f64> {
    if k < 1 {
        return Err(RuntimeError::invalid_argument(format!("geometric requires k >= 1, got {k}")));
    }
    if !(p > 0.0 && p <= 1.0) {
        return Err(RuntimeError::invalid_argument(format!("probability {p} is outside (0, 1]")));
    }
    Ok((1.0 - p).powf(i64_to_f64(k - 1)) * p)
}

fn check_selection(name: &str, n: i64, r: i64) -> EvalResult<()> {
    if n < 0 || r < 0 {
        return Err(RuntimeError::invalid_argument(format!("{name} requires non-negative n and r")));
    }
    if r > n {
        return Err(RuntimeError::invalid_argument(format!("{name} requires r <= n, got r = {r}, n = {n}")));
    }
    Ok(())
}

fn overflow(name: &str, n: i64, r: i64) -> RuntimeError {
    RuntimeError::Overflow { details: format!("{name}({n}, {r}) is too large") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinations() {
        assert_eq!(ncr(5, 2).unwrap(), 10.0);
        assert_eq!(ncr(10, 0).unwrap(), 1.0);
        assert_eq!(ncr(10, 10).unwrap(), 1.0);
        assert_eq!(ncr(52, 5).unwrap().round(), 2_598_960.0);
        assert!(matches!(ncr(3, 4), Err(RuntimeError::InvalidArgument { .. })));
        assert!(matches!(ncr(-1, 0), Err(RuntimeError::InvalidArgument { .. })));
        assert!(matches!(ncr(5000, 2500), Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn permutations() {
        assert_eq!(npr(5, 2).unwrap(), 20.0);
        assert_eq!(npr(5, 0).unwrap(), 1.0);
        assert_eq!(npr(6, 6).unwrap(), 720.0);
        assert!(matches!(npr(2, 3), Err(RuntimeError::InvalidArgument { .. })));
        assert!(matches!(npr(1000, 500), Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn factorial_bounds() {
        assert!(factorial(170).unwrap().is_finite());
        assert!(matches!(factorial(-1), Err(RuntimeError::InvalidArgument { .. })));
        assert!(matches!(factorial(171), Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn distributions() {
        assert!((binomial(10, 0.5, 5).unwrap() - 0.246_093_75).abs() < 1e-12);
        assert_eq!(binomial(3, 0.0, 0).unwrap(), 1.0);
        assert!(binomial(3, f64::NAN, 0).is_err());
        assert_eq!(geometric(0.5, 1).unwrap(), 0.5);
        assert_eq!(geometric(0.5, 3).unwrap(), 0.125);
        assert_eq!(geometric(1.0, 1).unwrap(), 1.0);
        assert!(geometric(0.0, 1).is_err());
        assert!(geometric(0.5, 0).is_err());
    }
}

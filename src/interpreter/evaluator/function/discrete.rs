use crate::{
    domain::discrete,
    interpreter::{
        evaluator::{core::EvalResult, utils::integer_arg},
        value::core::Value,
    },
    util::num::{i64_to_f64, u64_to_f64},
};

/// `gcd(a, b)`: greatest common divisor of the truncated operands.
pub fn gcd(args: &[Value]) -> EvalResult<Value> {
    let a = integer_arg(args, 0, "gcd")?;
    let b = integer_arg(args, 1, "gcd")?;
    Ok(Value::Number(u64_to_f64(discrete::gcd(a, b))))
}

/// `lcm(a, b)`: least common multiple, `0` if either operand is `0`.
pub fn lcm(args: &[Value]) -> EvalResult<Value> {
    let a = integer_arg(args, 0, "lcm")?;
    let b = integer_arg(args, 1, "lcm")?;
    Ok(Value::Number(u64_to_f64(discrete::lcm(a, b)?)))
}

/// `mod(a, m)`: remainder normalized into `[0, |m|)`.
pub fn modulo(args: &[Value]) -> EvalResult<Value> {
    let a = integer_arg(args, 0, "mod")?;
    let m = integer_arg(args, 1, "mod")?;
    Ok(Value::Number(i64_to_f64(discrete::modulo(a, m)?)))
}

/// `modpow(base, exp, m)`: `base^exp mod m` by repeated squaring.
pub fn modpow(args: &[Value]) -> EvalResult<Value> {
    let base = integer_arg(args, 0, "modpow")?;
    let exp = integer_arg(args, 1, "modpow")?;
    let m = integer_arg(args, 2, "modpow")?;
    Ok(Value::Number(i64_to_f64(discrete::modpow(base, exp, m)?)))
}

/// `is_prime(n)`: `1` if the truncated operand is prime, else `0`.
pub fn is_prime(args: &[Value]) -> EvalResult<Value> {
    let n = integer_arg(args, 0, "is_prime")?;
    Ok(Value::from(discrete::is_prime(n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    fn nums(values: &[f64]) -> Vec<Value> {
        values.iter().copied().map(Value::Number).collect()
    }

    #[test]
    fn operands_are_truncated() {
        assert_eq!(gcd(&nums(&[12.7, 18.2])), Ok(Value::Number(6.0)));
        assert_eq!(modulo(&nums(&[-7.5, 3.0])), Ok(Value::Number(2.0)));
        assert_eq!(is_prime(&nums(&[7.9])), Ok(Value::Number(1.0)));
        assert_eq!(is_prime(&nums(&[1.0])), Ok(Value::Number(0.0)));
    }

    #[test]
    fn modular_arithmetic() {
        assert_eq!(modpow(&nums(&[4.0, 13.0, 497.0])), Ok(Value::Number(445.0)));
        assert_eq!(lcm(&nums(&[4.0, 6.0])), Ok(Value::Number(12.0)));
        assert!(matches!(modulo(&nums(&[5.0, 0.0])), Err(RuntimeError::DivisionByZero { .. })));
    }

    #[test]
    fn vectors_are_not_integers() {
        let args = [Value::Vector(vec![1.0]), Value::Number(2.0)];
        assert!(matches!(gcd(&args), Err(RuntimeError::ExpectedNumber { .. })));
    }
}

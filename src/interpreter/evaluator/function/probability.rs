use crate::{
    domain::probability,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{integer_arg, number_arg},
        },
        value::core::Value,
    },
};

/// `ncr(n, r)` / `nCr(n, r)`: number of combinations.
pub fn ncr(args: &[Value]) -> EvalResult<Value> {
    let n = integer_arg(args, 0, "ncr")?;
    let r = integer_arg(args, 1, "ncr")?;
    Ok(Value::Number(probability::ncr(n, r)?))
}

/// `npr(n, r)` / `nPr(n, r)`: number of ordered arrangements.
pub fn npr(args: &[Value]) -> EvalResult<Value> {
    let n = integer_arg(args, 0, "npr")?;
    let r = integer_arg(args, 1, "npr")?;
    Ok(Value::Number(probability::npr(n, r)?))
}

/// `fact(n)` / `factorial(n)`.
pub fn factorial(args: &[Value]) -> EvalResult<Value> {
    let n = integer_arg(args, 0, "fact")?;
    Ok(Value::Number(probability::factorial(n)?))
}

/// `binomial(n, p, k)`: probability of exactly `k` successes in `n` trials.
pub fn binomial(args: &[Value]) -> EvalResult<Value> {
    let n = integer_arg(args, 0, "binomial")?;
    let p = number_arg(args, 1, "binomial")?;
    let k = integer_arg(args, 2, "binomial")?;
    Ok(Value::Number(probability::binomial(n, p, k)?))
}

/// `geometric(p, k)`: probability that the first success is trial `k`.
pub fn geometric(args: &[Value]) -> EvalResult<Value> {
    let p = number_arg(args, 0, "geometric")?;
    let k = integer_arg(args, 1, "geometric")?;
    Ok(Value::Number(probability::geometric(p, k)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    fn nums(values: &[f64]) -> Vec<Value> {
        values.iter().copied().map(Value::Number).collect()
    }

    #[test]
    fn counting() {
        assert_eq!(ncr(&nums(&[5.0, 2.0])), Ok(Value::Number(10.0)));
        assert_eq!(npr(&nums(&[5.0, 2.0])), Ok(Value::Number(20.0)));
        assert_eq!(factorial(&nums(&[5.9])), Ok(Value::Number(120.0)));
        assert!(matches!(factorial(&nums(&[171.0])), Err(RuntimeError::Overflow { .. })));
    }

    #[test]
    fn distributions() {
        let Value::Number(p) = binomial(&nums(&[10.0, 0.5, 5.0])).unwrap() else {
            panic!("binomial returned a non-number");
        };
        assert!((p - 0.246_093_75).abs() < 1e-12);
        assert_eq!(geometric(&nums(&[0.5, 1.0])), Ok(Value::Number(0.5)));
        assert!(geometric(&nums(&[0.0, 1.0])).is_err());
    }
}

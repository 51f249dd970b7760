use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{flatten, integer_arg, number_arg},
        },
        value::core::Value,
    },
    util::num::i64_to_f64,
};

/// `neg(x)`: arithmetic negation. The grammar has no unary minus.
pub fn neg(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Number(-number_arg(args, 0, "neg")?))
}

/// `bnot(x)`: bitwise complement of the truncated 64-bit operand.
pub fn bnot(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Number(i64_to_f64(!integer_arg(args, 0, "bnot")?)))
}

/// `not(x)`: `1` if `x` is zero, else `0`.
pub fn not(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::from(number_arg(args, 0, "not")? == 0.0))
}

/// Folds `and`, `or` or `xor` over the flattened arguments.
///
/// Each element is true when it is non-zero. At least two elements are
/// required; `xor` yields the parity of the true elements.
///
/// # Example
/// ```
/// use multicalc::{Value, interpreter::evaluator::function::logic::fold};
///
/// let args = [Value::Vector(vec![1.0, 1.0, 1.0])];
/// assert_eq!(fold("xor", &args).unwrap(), Value::Number(1.0));
/// assert_eq!(fold("and", &args).unwrap(), Value::Number(1.0));
/// ```
pub fn fold(function: &str, args: &[Value]) -> EvalResult<Value> {
    let data = flatten(args);
    if data.len() < 2 {
        return Err(RuntimeError::invalid_argument(format!("{function} needs at least 2 values, got {}",
                                                          data.len())));
    }
    let mut bits = data.iter().map(|x| *x != 0.0);
    let result = match function {
        "and" => bits.all(|b| b),
        "or" => bits.any(|b| b),
        "xor" => bits.fold(false, |parity, b| parity ^ b),
        _ => return Err(RuntimeError::UnknownFunction { name: function.to_string() }),
    };
    Ok(Value::from(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(values: &[f64]) -> Vec<Value> {
        values.iter().copied().map(Value::Number).collect()
    }

    #[test]
    fn unary_builtins() {
        assert_eq!(neg(&nums(&[2.5])), Ok(Value::Number(-2.5)));
        assert_eq!(bnot(&nums(&[0.0])), Ok(Value::Number(-1.0)));
        assert_eq!(bnot(&nums(&[5.7])), Ok(Value::Number(-6.0)));
        assert_eq!(not(&nums(&[0.0])), Ok(Value::Number(1.0)));
        assert_eq!(not(&nums(&[-3.0])), Ok(Value::Number(0.0)));
    }

    #[test]
    fn boolean_folds() {
        assert_eq!(fold("and", &nums(&[1.0, 2.0, 0.0])), Ok(Value::Number(0.0)));
        assert_eq!(fold("or", &nums(&[0.0, 0.0, 0.5])), Ok(Value::Number(1.0)));
        assert_eq!(fold("xor", &nums(&[1.0, 1.0])), Ok(Value::Number(0.0)));
        assert!(matches!(fold("or", &nums(&[1.0])), Err(RuntimeError::InvalidArgument { .. })));
    }
}

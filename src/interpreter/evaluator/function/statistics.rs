use crate::{
    domain::statistics,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{args_from, flatten, flatten_nonempty, number_arg},
        },
        value::core::Value,
    },
};

/// Applies a dataset statistic to every argument flattened into one list.
///
/// # Parameters
/// - `function`: Builtin name, used in error messages.
/// - `args`: Evaluated call arguments.
/// - `statistic`: The domain function computing the result.
pub fn aggregate(function: &str,
                 args: &[Value],
                 statistic: fn(&[f64]) -> EvalResult<f64>)
                 -> EvalResult<Value> {
    let data = flatten_nonempty(function, args)?;
    Ok(Value::Number(statistic(&data)?))
}

/// `zscore(value, data...)`: the first argument is the value to score and is
/// not part of the dataset.
pub fn zscore(args: &[Value]) -> EvalResult<Value> {
    let value = number_arg(args, 0, "zscore")?;
    let data = flatten_nonempty("zscore", args_from(args, 1))?;
    Ok(Value::Number(statistics::zscore(value, &data)?))
}

/// `correlation(x..., y...)`: the flattened arguments are split in half into
/// paired samples.
pub fn correlation(args: &[Value]) -> EvalResult<Value> {
    let mut x = flatten(args);
    if x.is_empty() || x.len() % 2 != 0 {
        return Err(RuntimeError::invalid_argument(format!("correlation needs an even number of values, got {}",
                                                          x.len())));
    }
    let y = x.split_off(x.len() / 2);
    Ok(Value::Number(statistics::correlation(&x, &y)?))
}

use crate::{
    domain::set_ops,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::split_pair},
        value::core::Value,
    },
};

/// Evaluates `set_union`, `set_intersect` or `set_diff`.
///
/// The operands come from [`split_pair`]: two vectors as given, or the
/// flattened arguments split in half.
///
/// # Example
/// ```
/// use multicalc::{Value, interpreter::evaluator::function::set::set_op};
///
/// let args = [Value::Vector(vec![1.0, 2.0, 3.0]), Value::Vector(vec![2.0, 3.0, 4.0])];
/// assert_eq!(set_op("set_diff", &args).unwrap(), Value::Vector(vec![1.0]));
/// ```
pub fn set_op(function: &str, args: &[Value]) -> EvalResult<Value> {
    let (a, b) = split_pair(function, args)?;
    let result = match function {
        "set_union" => set_ops::union(&a, &b),
        "set_intersect" => set_ops::intersection(&a, &b),
        "set_diff" => set_ops::difference(&a, &b),
        _ => return Err(RuntimeError::UnknownFunction { name: function.to_string() }),
    };
    Ok(Value::Vector(result))
}

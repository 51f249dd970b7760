use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::f64_to_i64_truncated,
};

/// Flattens evaluated arguments into one list of scalars.
///
/// Numbers contribute themselves, vectors their elements and matrices their
/// elements in row-major order. Argument order is preserved.
///
/// # Example
/// ```
/// use multicalc::{Value, interpreter::evaluator::utils::flatten};
///
/// let args = [Value::Number(1.0), Value::Vector(vec![2.0, 3.0])];
/// assert_eq!(flatten(&args), vec![1.0, 2.0, 3.0]);
/// ```
#[must_use]
pub fn flatten(args: &[Value]) -> Vec<f64> {
    let mut out = Vec::new();
    for arg in args {
        arg.flatten_into(&mut out);
    }
    out
}

/// Flattens `args` and rejects an empty result.
pub fn flatten_nonempty(function: &str, args: &[Value]) -> EvalResult<Vec<f64>> {
    let data = flatten(args);
    if data.is_empty() {
        return Err(RuntimeError::invalid_argument(format!("{function} needs at least one element")));
    }
    Ok(data)
}

/// Returns argument `index`, or an error naming the missing position.
pub fn arg<'a>(args: &'a [Value], index: usize, function: &str) -> EvalResult<&'a Value> {
    args.get(index).ok_or_else(|| {
                       RuntimeError::invalid_argument(format!("{function} is missing argument {}",
                                                              index + 1))
                   })
}

/// Returns the arguments from `index` on, empty when there are none.
#[must_use]
pub fn args_from(args: &[Value], index: usize) -> &[Value] {
    args.get(index..).unwrap_or_default()
}

/// Reads argument `index` as a number.
pub fn number_arg(args: &[Value], index: usize, function: &str) -> EvalResult<f64> {
    arg(args, index, function)?.as_number(function)
}

/// Reads argument `index` as a number truncated toward zero to `i64`.
pub fn integer_arg(args: &[Value], index: usize, function: &str) -> EvalResult<i64> {
    f64_to_i64_truncated(number_arg(args, index, function)?, function)
}

/// Produces the two operands of a pairwise vector or set operation.
///
/// Two vector arguments are used as they are. Any other argument list is
/// flattened and split in half, which requires an even number of at least two
/// elements.
///
/// # Returns
/// - `Ok((a, b))`: The left and right operands.
/// - `Err(RuntimeError::InvalidArgument)`: If the flattened count is odd or
///   below two.
///
/// # Example
/// ```
/// use multicalc::{Value, interpreter::evaluator::utils::split_pair};
///
/// let args: Vec<Value> = [1.0, 2.0, 3.0, 4.0].map(Value::Number).into();
/// let (a, b) = split_pair("vec_add", &args).unwrap();
/// assert_eq!((a, b), (vec![1.0, 2.0], vec![3.0, 4.0]));
/// ```
pub fn split_pair(function: &str, args: &[Value]) -> EvalResult<(Vec<f64>, Vec<f64>)> {
    if let [Value::Vector(a), Value::Vector(b)] = args {
        return Ok((a.clone(), b.clone()));
    }

    let mut first = flatten(args);
    if first.len() < 2 || first.len() % 2 != 0 {
        return Err(RuntimeError::invalid_argument(format!("{function} needs an even number of at least 2 elements, got {}",
                                                          first.len())));
    }
    let second = first.split_off(first.len() / 2);
    Ok((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::matrix::Matrix;

    #[test]
    fn flatten_walks_every_shape() {
        let matrix = Matrix::new(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        let args = [Value::Vector(vec![1.0, 2.0]), Value::Number(3.0), Value::Matrix(matrix)];
        assert_eq!(flatten(&args), vec![1.0, 2.0, 3.0, 5.0, 6.0, 7.0, 8.0]);
        assert!(flatten_nonempty("mean", &[Value::Vector(vec![])]).is_err());
    }

    #[test]
    fn two_vectors_are_used_directly() {
        let args = [Value::Vector(vec![1.0]), Value::Vector(vec![2.0, 3.0])];
        assert_eq!(split_pair("vec_add", &args).unwrap(), (vec![1.0], vec![2.0, 3.0]));
    }

    #[test]
    fn odd_or_short_lists_are_rejected() {
        for args in [vec![Value::Number(1.0)], vec![Value::Vector(vec![1.0, 2.0, 3.0])]] {
            assert!(matches!(split_pair("set_union", &args),
                             Err(RuntimeError::InvalidArgument { .. })));
        }
    }

    #[test]
    fn missing_arguments_are_errors() {
        assert!(matches!(arg(&[], 0, "mat_det"), Err(RuntimeError::InvalidArgument { .. })));
        assert!(matches!(number_arg(&[Value::Number(1.0)], 1, "gcd"),
                         Err(RuntimeError::InvalidArgument { .. })));
        assert!(args_from(&[Value::Number(1.0)], 3).is_empty());
    }

    #[test]
    fn integer_arguments_truncate() {
        let args = [Value::Number(-7.9), Value::Vector(vec![1.0])];
        assert_eq!(integer_arg(&args, 0, "gcd"), Ok(-7));
        assert!(matches!(integer_arg(&args, 1, "gcd"), Err(RuntimeError::ExpectedNumber { .. })));
    }
}

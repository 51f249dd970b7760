use crate::{
    domain::linalg,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{arg, args_from, flatten, flatten_nonempty, number_arg, split_pair},
        },
        value::{core::Value, matrix::Matrix},
    },
    util::num::f64_to_usize_checked,
};

/// `vector(e...)`: collects every argument element into one vector.
pub fn vector(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Vector(flatten_nonempty("vector", args)?))
}

/// `matrix(rows, cols, e...)`: builds a row-major matrix.
///
/// The elements are flattened and must number exactly `rows * cols`.
///
/// # Example
/// ```
/// use multicalc::{Value, interpreter::evaluator::function::linalg::matrix};
///
/// let args = [Value::Number(2.0), Value::Number(2.0), Value::Vector(vec![1.0, 2.0, 3.0, 4.0])];
/// let Value::Matrix(m) = matrix(&args).unwrap() else { panic!() };
/// assert_eq!(m.get(1, 0), 3.0);
/// ```
pub fn matrix(args: &[Value]) -> EvalResult<Value> {
    let rows = f64_to_usize_checked(number_arg(args, 0, "matrix")?, "matrix rows")?;
    let cols = f64_to_usize_checked(number_arg(args, 1, "matrix")?, "matrix cols")?;
    let data = flatten(args_from(args, 2));
    Ok(Value::Matrix(Matrix::new(rows, cols, data)?))
}

/// Evaluates `vec_add`, `vec_sub` or `vec_dot` on the operands produced by
/// [`split_pair`].
pub fn vec_pairwise(function: &str, args: &[Value]) -> EvalResult<Value> {
    let (a, b) = split_pair(function, args)?;
    match function {
        "vec_add" => Ok(Value::Vector(linalg::vec_add(&a, &b)?)),
        "vec_sub" => Ok(Value::Vector(linalg::vec_sub(&a, &b)?)),
        "vec_dot" => Ok(Value::Number(linalg::vec_dot(&a, &b)?)),
        _ => Err(RuntimeError::UnknownFunction { name: function.to_string() }),
    }
}

/// `vec_scale(scalar, v...)`: the remaining arguments are flattened into the
/// vector.
pub fn vec_scale(args: &[Value]) -> EvalResult<Value> {
    let scalar = number_arg(args, 0, "vec_scale")?;
    let v = flatten(args_from(args, 1));
    Ok(Value::Vector(linalg::vec_scale(&v, scalar)))
}

/// `vec_mag(v...)`: Euclidean norm of the flattened arguments.
pub fn vec_mag(args: &[Value]) -> EvalResult<Value> {
    let v = flatten_nonempty("vec_mag", args)?;
    Ok(Value::Number(linalg::vec_magnitude(&v)))
}

/// Evaluates `mat_add`, `mat_sub` or `mat_mul` on two matrix arguments.
pub fn mat_binary(function: &str, args: &[Value]) -> EvalResult<Value> {
    let a = arg(args, 0, function)?.as_matrix(function)?;
    let b = arg(args, 1, function)?.as_matrix(function)?;
    let result = match function {
        "mat_add" => linalg::mat_add(a, b)?,
        "mat_sub" => linalg::mat_sub(a, b)?,
        "mat_mul" => linalg::mat_mul(a, b)?,
        _ => return Err(RuntimeError::UnknownFunction { name: function.to_string() }),
    };
    Ok(Value::Matrix(result))
}

/// `mat_vec_mul(m, v)`: the second argument must be a vector.
pub fn mat_vec_mul(args: &[Value]) -> EvalResult<Value> {
    let m = arg(args, 0, "mat_vec_mul")?.as_matrix("mat_vec_mul")?;
    let second = arg(args, 1, "mat_vec_mul")?;
    let v = second.as_vector().ok_or_else(|| {
                                  RuntimeError::invalid_argument(format!("mat_vec_mul expects a vector, found a {}",
                                                                         second.type_name()))
                              })?;
    Ok(Value::Vector(linalg::mat_vec_mul(m, v)?))
}

/// `mat_scale(scalar, m)`.
pub fn mat_scale(args: &[Value]) -> EvalResult<Value> {
    let scalar = number_arg(args, 0, "mat_scale")?;
    let m = arg(args, 1, "mat_scale")?.as_matrix("mat_scale")?;
    Ok(Value::Matrix(linalg::mat_scale(m, scalar)))
}

/// `mat_det(m)`: determinant of a 2x2 or 3x3 matrix.
pub fn mat_det(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Number(linalg::mat_det(arg(args, 0, "mat_det")?.as_matrix("mat_det")?)?))
}

/// `mat_transpose(m)`.
pub fn mat_transpose(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Matrix(linalg::mat_transpose(arg(args, 0, "mat_transpose")?.as_matrix("mat_transpose")?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(data: [f64; 4]) -> Value {
        Value::Matrix(Matrix::new(2, 2, data.to_vec()).unwrap())
    }

    #[test]
    fn construction() {
        assert_eq!(vector(&[Value::Number(1.0), Value::Vector(vec![2.0])]),
                   Ok(Value::Vector(vec![1.0, 2.0])));
        assert!(vector(&[]).is_err());

        let args = [Value::Number(2.0), Value::Number(2.0), Value::Number(1.0)];
        assert!(matches!(matrix(&args), Err(RuntimeError::InvalidArgument { .. })));
        let args = [Value::Number(-2.0), Value::Number(2.0), Value::Number(1.0)];
        assert!(matches!(matrix(&args), Err(RuntimeError::InvalidArgument { .. })));
    }

    #[test]
    fn pairwise_vectors() {
        let args = [Value::Vector(vec![1.0, 2.0]), Value::Vector(vec![3.0, 4.0])];
        assert_eq!(vec_pairwise("vec_add", &args), Ok(Value::Vector(vec![4.0, 6.0])));
        assert_eq!(vec_pairwise("vec_dot", &args), Ok(Value::Number(11.0)));
        let uneven = [Value::Vector(vec![1.0]), Value::Vector(vec![3.0, 4.0])];
        assert!(matches!(vec_pairwise("vec_sub", &uneven),
                         Err(RuntimeError::DimensionMismatch { .. })));
    }

    #[test]
    fn scaling_and_magnitude() {
        let args = [Value::Number(2.0), Value::Number(1.0), Value::Vector(vec![2.0])];
        assert_eq!(vec_scale(&args), Ok(Value::Vector(vec![2.0, 4.0])));
        assert_eq!(vec_mag(&[Value::Number(3.0), Value::Number(4.0)]), Ok(Value::Number(5.0)));
        assert_eq!(mat_scale(&[Value::Number(2.0), square([1.0, 0.0, 0.0, 1.0])]),
                   Ok(square([2.0, 0.0, 0.0, 2.0])));
    }

    #[test]
    fn matrix_arguments_are_type_checked() {
        let args = [Value::Vector(vec![1.0]), square([1.0; 4])];
        assert!(matches!(mat_binary("mat_add", &args), Err(RuntimeError::ExpectedMatrix { .. })));
        let args = [square([1.0; 4]), Value::Number(1.0)];
        assert!(matches!(mat_vec_mul(&args), Err(RuntimeError::InvalidArgument { .. })));
        assert!(matches!(mat_det(&[Value::Number(1.0)]), Err(RuntimeError::ExpectedMatrix { .. })));
    }

    #[test]
    fn short_argument_lists_are_errors() {
        let one = [Value::Number(2.0)];
        assert!(matches!(matrix(&one), Err(RuntimeError::InvalidArgument { .. })));
        assert!(matches!(mat_binary("mat_mul", &[square([1.0; 4])]),
                         Err(RuntimeError::InvalidArgument { .. })));
        assert!(matches!(mat_scale(&one), Err(RuntimeError::InvalidArgument { .. })));
        assert!(matches!(mat_det(&[]), Err(RuntimeError::InvalidArgument { .. })));
        assert!(vec_scale(&[]).is_err());
        assert_eq!(vec_scale(&one), Ok(Value::Vector(vec![])));
    }

    #[test]
    fn matrix_results() {
        let a = square([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(mat_det(&[a.clone()]), Ok(Value::Number(-2.0)));
        assert_eq!(mat_transpose(&[a.clone()]), Ok(square([1.0, 3.0, 2.0, 4.0])));
        assert_eq!(mat_binary("mat_mul", &[a.clone(), square([1.0, 0.0, 0.0, 1.0])]), Ok(a));
    }
}

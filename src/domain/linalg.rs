use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::matrix::Matrix},
};

fn same_length(name: &str, a: &[f64], b: &[f64]) -> EvalResult<()> {
    if a.len() != b.len() {
        return Err(RuntimeError::dimension_mismatch(format!("{name} needs vectors of equal size, got {} and {}",
                                                            a.len(),
                                                            b.len())));
    }
    Ok(())
}

fn same_shape(name: &str, a: &Matrix, b: &Matrix) -> EvalResult<()> {
    if a.rows() != b.rows() || a.cols() != b.cols() {
        return Err(RuntimeError::dimension_mismatch(format!("{name} needs matrices of equal shape, got {} and {}",
                                                            a.shape(),
                                                            b.shape())));
    }
    Ok(())
}

/// Element-wise sum of two vectors of equal size.
pub fn vec_add(a: &[f64], b: &[f64]) -> EvalResult<Vec<f64>> {
    same_length("vec_add", a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Element-wise difference of two vectors of equal size.
pub fn vec_sub(a: &[f64], b: &[f64]) -> EvalResult<Vec<f64>> {
    same_length("vec_sub", a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

/// Multiplies every element by `scalar`.
#[must_use]
pub fn vec_scale(v: &[f64], scalar: f64) -> Vec<f64> {
    v.iter().map(|x| x * scalar).collect()
}

/// Dot product of two vectors of equal size.
///
/// # Example
/// ```
/// use multicalc::domain::linalg::vec_dot;
///
/// assert_eq!(vec_dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
/// assert!(vec_dot(&[1.0], &[1.0, 2.0]).is_err());
/// ```
pub fn vec_dot(a: &[f64], b: &[f64]) -> EvalResult<f64> {
    same_length("vec_dot", a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Euclidean norm. The empty vector has magnitude `0`.
#[must_use]
pub fn vec_magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Element-wise sum of two matrices of identical shape.
pub fn mat_add(a: &Matrix, b: &Matrix) -> EvalResult<Matrix> {
    same_shape("mat_add", a, b)?;
    Ok(Matrix::from_fn(a.rows(), a.cols(), |r, c| a.get(r, c) + b.get(r, c)))
}

/// Element-wise difference of two matrices of identical shape.
pub fn mat_sub(a: &Matrix, b: &Matrix) -> EvalResult<Matrix> {
    same_shape("mat_sub", a, b)?;
    Ok(Matrix::from_fn(a.rows(), a.cols(), |r, c| a.get(r, c) - b.get(r, c)))
}

/// Matrix product; requires `a.cols() == b.rows()`.
pub fn mat_mul(a: &Matrix, b: &Matrix) -> EvalResult<Matrix> {
    if a.cols() != b.rows() {
        return Err(RuntimeError::dimension_mismatch(format!("cannot multiply a {} matrix by a {} matrix",
                                                            a.shape(),
                                                            b.shape())));
    }
    Ok(Matrix::from_fn(a.rows(), b.cols(), |r, c| {
        (0..a.cols()).map(|k| a.get(r, k) * b.get(k, c)).sum()
    }))
}

/// Matrix-vector product; requires `m.cols() == v.len()`.
pub fn mat_vec_mul(m: &Matrix, v: &[f64]) -> EvalResult<Vec<f64>> {
    if m.cols() != v.len() {
        return Err(RuntimeError::dimension_mismatch(format!("cannot multiply a {} matrix by a vector of size {}",
                                                            m.shape(),
                                                            v.len())));
    }
    Ok((0..m.rows()).map(|r| (0..m.cols()).map(|c| m.get(r, c) * v[c]).sum())
                    .collect())
}

/// Multiplies every element by `scalar`.
#[must_use]
pub fn mat_scale(m: &Matrix, scalar: f64) -> Matrix {
    Matrix::from_fn(m.rows(), m.cols(), |r, c| m.get(r, c) * scalar)
}

/// Determinant by closed-form cofactor expansion.
///
/// # Returns
/// - `Ok(f64)`: The determinant of a 2x2 or 3x3 matrix.
/// - `Err(RuntimeError::DimensionMismatch)`: If the matrix is not square.
/// - `Err(RuntimeError::Unsupported)`: For any other square size.
///
/// # Example
/// ```
/// use multicalc::{Matrix, domain::linalg::mat_det};
///
/// let m = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(mat_det(&m).unwrap(), -2.0);
/// ```
pub fn mat_det(m: &Matrix) -> EvalResult<f64> {
    if !m.is_square() {
        return Err(RuntimeError::dimension_mismatch(format!("determinant needs a square matrix, got {}",
                                                            m.shape())));
    }
    let d = m.data();
    match m.rows() {
        2 => Ok(d[0] * d[3] - d[1] * d[2]),
        3 => Ok(d[0] * d[4] * d[8] + d[1] * d[5] * d[6] + d[2] * d[3] * d[7]
                - d[2] * d[4] * d[6]
                - d[1] * d[3] * d[8]
                - d[0] * d[5] * d[7]),
        _ => Err(RuntimeError::Unsupported { details: format!("determinant of a {} matrix; only 2x2 and 3x3 are supported",
                                                              m.shape()) }),
    }
}

/// Swaps rows and columns.
#[must_use]
pub fn mat_transpose(m: &Matrix) -> Matrix {
    Matrix::from_fn(m.cols(), m.rows(), |r, c| m.get(c, r))
}

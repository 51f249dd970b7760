use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            format::{Base, format_value},
            matrix::Matrix,
        },
    },
};

/// Represents a runtime value produced by evaluation.
///
/// Values own their buffers; cloning a value deep-copies its elements.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A scalar.
    Number(f64),
    /// An ordered sequence of scalars.
    Vector(Vec<f64>),
    /// A row-major matrix.
    Matrix(Matrix),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Vector(v)
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Self::Matrix(m)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Number(if b { 1.0 } else { 0.0 })
    }
}

impl Value {
    /// Returns a lowercase name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Vector(_) => "vector",
            Self::Matrix(_) => "matrix",
        }
    }

    /// Returns the scalar if the value is a number.
    ///
    /// # Parameters
    /// - `function`: Name of the caller, used in the error message.
    ///
    /// # Returns
    /// - `Ok(f64)`: For `Value::Number`.
    /// - `Err(RuntimeError::ExpectedNumber)`: For vectors and matrices.
    ///
    /// # Example
    /// ```
    /// use multicalc::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number("fact").unwrap(), 2.5);
    /// assert!(Value::Vector(vec![1.0]).as_number("fact").is_err());
    /// ```
    pub fn as_number(&self, function: &str) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeError::ExpectedNumber { function: function.to_string(),
                                                        found:    other.type_name(), }),
        }
    }

    /// Returns the matrix if the value is one.
    ///
    /// # Parameters
    /// - `function`: Name of the caller, used in the error message.
    pub fn as_matrix(&self, function: &str) -> EvalResult<&Matrix> {
        match self {
            Self::Matrix(m) => Ok(m),
            other => Err(RuntimeError::ExpectedMatrix { function: function.to_string(),
                                                        found:    other.type_name(), }),
        }
    }

    /// Returns the elements if the value is a vector.
    #[must_use]
    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            Self::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Appends every scalar in the value to `out`.
    ///
    /// Numbers contribute one element, vectors their elements in order and
    /// matrices `rows * cols` elements in row-major order.
    pub fn flatten_into(&self, out: &mut Vec<f64>) {
        match self {
            Self::Number(n) => out.push(*n),
            Self::Vector(v) => out.extend_from_slice(v),
            Self::Matrix(m) => out.extend_from_slice(m.data()),
        }
    }
}

/// Formats the value in decimal. See [`format_value`] for other bases.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_value(self, Base::Decimal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattening_preserves_order() {
        let matrix = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut out = Vec::new();
        Value::Number(0.0).flatten_into(&mut out);
        Value::Vector(vec![9.0, 8.0]).flatten_into(&mut out);
        Value::Matrix(matrix).flatten_into(&mut out);
        assert_eq!(out, vec![0.0, 9.0, 8.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn type_errors_name_the_function() {
        let err = Value::Vector(vec![1.0]).as_number("gcd").unwrap_err();
        assert_eq!(err,
                   RuntimeError::ExpectedNumber { function: "gcd".into(),
                                                  found:    "vector", });
        let err = Value::Number(1.0).as_matrix("mat_det").unwrap_err();
        assert!(matches!(err, RuntimeError::ExpectedMatrix { found: "number", .. }));
    }

    #[test]
    fn clone_is_deep() {
        let original = Value::Vector(vec![1.0, 2.0]);
        let mut copy = original.clone();
        if let Value::Vector(v) = &mut copy {
            v[0] = 5.0;
        }
        assert_eq!(original, Value::Vector(vec![1.0, 2.0]));
    }
}

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// A dense, row-major matrix of `f64`.
///
/// The element buffer always holds exactly `rows * cols` values; the fields
/// are private so that no caller can break this.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix from row-major elements.
    ///
    /// # Parameters
    /// - `rows`: Number of rows.
    /// - `cols`: Number of columns.
    /// - `data`: Row-major elements.
    ///
    /// # Returns
    /// - `Ok(Matrix)`: If `data.len() == rows * cols`.
    /// - `Err(RuntimeError::InvalidArgument)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use multicalc::Matrix;
    ///
    /// let m = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.get(1, 0), 3.0);
    ///
    /// assert!(Matrix::new(2, 2, vec![1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> EvalResult<Self> {
        match rows.checked_mul(cols) {
            Some(expected) if expected == data.len() => Ok(Self { data, rows, cols }),
            _ => Err(RuntimeError::invalid_argument(format!("a {rows}x{cols} matrix needs {} elements, got {}",
                                                            rows.saturating_mul(cols),
                                                            data.len()))),
        }
    }

    /// Creates a matrix by calling `element(row, col)` for every position.
    pub fn from_fn(rows: usize, cols: usize, mut element: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(element(r, c));
            }
        }
        Self { data, rows, cols }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the matrix has as many rows as columns.
    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The elements in row-major order.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the position is outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols,
                "({row}, {col}) is outside a {}x{} matrix",
                self.rows,
                self.cols);
        self.data[row * self.cols + col]
    }

    /// Returns `"RxC"`, used in error messages.
    #[must_use]
    pub fn shape(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }
}

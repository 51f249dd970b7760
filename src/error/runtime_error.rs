use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division (or modulo) by zero.
    #[error("Division by zero: {details}.")]
    DivisionByZero {
        /// What was being divided.
        details: String,
    },
    /// A result or operand is outside the domain of the operation.
    #[error("Domain error: {details}.")]
    Domain {
        /// Details about the offending value.
        details: String,
    },
    /// A result is too large to be represented.
    #[error("Overflow: {details}.")]
    Overflow {
        /// Details about the computation that overflowed.
        details: String,
    },
    /// An argument was invalid or out of range.
    #[error("Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("{name} requires {expected}.")]
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// Human-readable arity, e.g. `2 arguments`.
        expected: String,
    },
    /// A plain number was expected, but a vector or matrix was found.
    #[error("{function} expects a number, found a {found}.")]
    ExpectedNumber {
        /// The function or operation that required a number.
        function: String,
        /// The kind of value actually supplied.
        found:    &'static str,
    },
    /// A matrix was expected, but something else was found.
    #[error("{function} expects a matrix, found a {found}. Use matrix(rows, cols, ...).")]
    ExpectedMatrix {
        /// The function that required a matrix.
        function: String,
        /// The kind of value actually supplied.
        found:    &'static str,
    },
    /// Two operands have incompatible shapes.
    #[error("Dimension mismatch: {details}.")]
    DimensionMismatch {
        /// Details about the shapes involved.
        details: String,
    },
    /// The operation exists but is not supported for these inputs.
    #[error("Unsupported operation: {details}.")]
    Unsupported {
        /// Details about what is unsupported.
        details: String,
    },
    /// Called a function that is not a builtin.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// An operator was applied to a vector or matrix.
    #[error("Operator '{operator}' requires numeric operands.")]
    NonNumericOperands {
        /// The operator symbol.
        operator: String,
    },
}

impl RuntimeError {
    /// Shorthand for [`RuntimeError::InvalidArgument`].
    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::InvalidArgument { details: details.into() }
    }

    /// Shorthand for [`RuntimeError::DimensionMismatch`].
    pub fn dimension_mismatch(details: impl Into<String>) -> Self {
        Self::DimensionMismatch { details: details.into() }
    }

    /// Shorthand for [`RuntimeError::DivisionByZero`].
    pub fn division_by_zero(details: impl Into<String>) -> Self {
        Self::DivisionByZero { details: details.into() }
    }
}

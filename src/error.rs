/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression: unknown characters, malformed literals, misplaced commas,
/// unbalanced parentheses and operator/argument underflow. Every variant
/// except `EmptyExpression` carries the byte offset of the failure.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression, such as division by zero, domain violations, arity mismatches
/// and shape mismatches between vectors and matrices.
pub mod runtime_error;

use std::fmt;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// The category of an error, independent of its concrete variant.
///
/// Front ends use the kind to decide how to present a failure; the message of
/// the concrete error carries the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Lexical error in the expression text.
    Syntax,
    /// A value outside the domain of the operation.
    Domain,
    /// A result too large to represent.
    Overflow,
    /// A result too small to represent.
    Underflow,
    /// Division or modulo by zero.
    DivisionByZero,
    /// Wrong argument count, type or range.
    InvalidArguments,
    /// Vector or matrix shapes do not fit together.
    DimensionMismatch,
    /// Allocation failure.
    Memory,
    /// Unknown function or unsupported operation.
    Unsupported,
    /// Structural error in the token stream.
    Parse,
    /// Generic evaluation error.
    Eval,
    /// Anything else.
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Syntax => "Syntax error",
            Self::Domain => "Domain error",
            Self::Overflow => "Numeric overflow",
            Self::Underflow => "Numeric underflow",
            Self::DivisionByZero => "Division by zero",
            Self::InvalidArguments => "Invalid arguments",
            Self::DimensionMismatch => "Dimension mismatch",
            Self::Memory => "Memory allocation failed",
            Self::Unsupported => "Unsupported operation",
            Self::Parse => "Parse error",
            Self::Eval => "Evaluation error",
            Self::Unknown => "Unknown error",
        };
        f.write_str(text)
    }
}

/// Any error produced by [`crate::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The expression could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parsed expression failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl EvalError {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use multicalc::{EngineContext, ErrorKind, evaluate};
    ///
    /// let err = evaluate("5 / 0", &EngineContext::default()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) if e.is_lexical() => ErrorKind::Syntax,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Runtime(e) => match e {
                RuntimeError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
                RuntimeError::Domain { .. } => ErrorKind::Domain,
                RuntimeError::Overflow { .. } => ErrorKind::Overflow,
                RuntimeError::InvalidArgument { .. }
                | RuntimeError::ArgumentCountMismatch { .. }
                | RuntimeError::ExpectedNumber { .. }
                | RuntimeError::ExpectedMatrix { .. } => ErrorKind::InvalidArguments,
                RuntimeError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
                RuntimeError::Unsupported { .. } | RuntimeError::UnknownFunction { .. } => {
                    ErrorKind::Unsupported
                },
                RuntimeError::NonNumericOperands { .. } => ErrorKind::Eval,
            },
        }
    }

    /// Returns the byte offset in the source expression, when known.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => e.offset(),
            Self::Runtime(_) => None,
        }
    }
}

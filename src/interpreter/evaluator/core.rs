use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::value::{core::Value, format::Base},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The calculator mode a front end is in.
///
/// The mode is carried for the caller's benefit; every mode accepts every
/// operator and builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Plain arithmetic.
    #[default]
    Standard,
    /// Integer and bitwise work, usually with a non-decimal base.
    Programmer,
    /// Descriptive statistics.
    Statistics,
    /// Combinatorics and distributions.
    Probability,
    /// Number theory.
    Discrete,
    /// Vectors and matrices.
    LinearAlgebra,
}

/// Error returned when a mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown mode '{0}': expected standard, programmer, statistics, probability, discrete or linalg.")]
pub struct InvalidMode(pub String);

impl Mode {
    /// Every mode, in menu order.
    pub const ALL: [Self; 6] = [Self::Standard,
                                Self::Programmer,
                                Self::Statistics,
                                Self::Probability,
                                Self::Discrete,
                                Self::LinearAlgebra];

    /// The lowercase name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Programmer => "programmer",
            Self::Statistics => "statistics",
            Self::Probability => "probability",
            Self::Discrete => "discrete",
            Self::LinearAlgebra => "linalg",
        }
    }
}

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter()
                 .find(|mode| mode.name() == wanted)
                 .ok_or_else(|| InvalidMode(s.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The read-only settings an expression is evaluated under.
///
/// ## Usage
///
/// A front end keeps one `EngineContext`, changes `mode` and `base` between
/// evaluations, and passes it by shared reference to [`crate::evaluate`].
/// Evaluation never mutates it, so a context can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineContext {
    /// The current calculator mode.
    pub mode: Mode,
    /// The base integral results are displayed in.
    pub base: Base,
}

impl EngineContext {
    /// Creates a context in the given mode with a decimal base.
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self { mode,
               base: Base::Decimal }
    }

    /// Returns the context with `base` replaced.
    #[must_use]
    pub const fn with_base(self, base: Base) -> Self {
        Self { base, ..self }
    }

    /// Evaluates an expression tree and returns the resulting value.
    ///
    /// Numbers evaluate to themselves, binary operations evaluate the left
    /// operand fully before the right one, and function calls are dispatched
    /// through the builtin table. The first error stops evaluation.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use multicalc::{EngineContext, Value, parse};
    ///
    /// let context = EngineContext::default();
    /// let expr = parse("vec_dot(1, 2, 3, 4, 5, 6)").unwrap();
    /// assert_eq!(context.eval(&expr).unwrap(), Value::Number(32.0));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::BinaryOp { op, left, right, .. } => self.eval_binary_op(*op, left, right),
            Expr::FunctionCall { name, arguments, .. } => self.eval_function(name, arguments),
        }
    }
}

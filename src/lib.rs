//! # multicalc
//!
//! multicalc is a multi-mode calculator engine written in Rust.
//! It parses infix expressions over numbers written in four bases, evaluates
//! them against a library of discrete, probability, statistics, linear algebra
//! and set builtins, and formats the resulting numbers, vectors and matrices.
//!
//! ```
//! use multicalc::{Base, EngineContext, Mode, evaluate, format_value};
//!
//! let context = EngineContext::new(Mode::Programmer).with_base(Base::Hexadecimal);
//! let value = evaluate("0xF0 | 0x0F", &context).unwrap();
//! assert_eq!(format_value(&value, context.base), "0xFF");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::{
    error::{ErrorKind, EvalError},
    interpreter::{
        evaluator::core::{EngineContext, Mode},
        lexer::tokenize,
        parser::core::parse,
        value::{
            core::Value,
            format::{Base, format_value},
            matrix::Matrix,
        },
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the binary operators. Every node
/// records the byte offset of the token it was built from, and the tree
/// renders back to a fully parenthesized infix string.
pub mod ast;
/// Pure numeric libraries behind the builtins.
///
/// These functions know nothing about the expression language. They take
/// plain integers, floats, slices and matrices and return results or
/// `RuntimeError`s.
pub mod domain;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating an expression, and the coarse `ErrorKind` taxonomy
/// front ends display.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets to syntax errors.
/// - Maps every error to exactly one `ErrorKind`.
pub mod error;
/// Tokenizing, parsing, evaluation and values.
///
/// This module ties together the phases that turn expression text into a
/// `Value`.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Parses and evaluates an expression.
///
/// The context is read only; evaluating never changes it, and the same text
/// under the same context always produces the same result.
///
/// # Parameters
/// - `expression`: Infix expression text.
/// - `context`: Mode and base to evaluate under.
///
/// # Returns
/// - `Ok(Value)`: The result of the expression.
/// - `Err(EvalError)`: The first parse or runtime error.
///
/// # Examples
/// ```
/// use multicalc::{EngineContext, ErrorKind, Value, evaluate};
///
/// let context = EngineContext::default();
/// assert_eq!(evaluate("3 + 4 * 2", &context).unwrap(), Value::Number(11.0));
///
/// let err = evaluate("mean()", &context).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArguments);
/// ```
pub fn evaluate(expression: &str, context: &EngineContext) -> Result<Value, EvalError> {
    debug!(expression, mode = %context.mode, base = %context.base, "evaluating");

    let result = parse(expression).map_err(EvalError::from)
                                  .and_then(|expr| context.eval(&expr).map_err(EvalError::from));

    if let Err(e) = &result {
        debug!(kind = %e.kind(), error = %e, "evaluation failed");
    }
    result
}

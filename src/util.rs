/// Numeric conversion helpers.
///
/// This module provides the conversions between `f64`, `i64` and `usize`
/// used by the integer-valued builtins, the bitwise operators and the matrix
/// constructor. Conversions that can fail return a `RuntimeError` that names
/// the operation which requested them.
pub mod num;

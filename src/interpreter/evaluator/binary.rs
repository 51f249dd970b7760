/// Operator dispatch and result validation.
pub mod core;

/// Floating-point arithmetic operators.
pub mod scalar;

/// Integer bitwise and shift operators.
///
/// Operands are truncated to 64-bit signed integers before the operation.
pub mod bitwise;

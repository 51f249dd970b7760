/// Core evaluation logic and context management.
///
/// Contains the engine context, the calculator modes and the recursive tree
/// walk that dispatches to operators and builtins.
pub mod core;

/// Binary operator evaluation logic.
///
/// Applies the arithmetic and bitwise operators to numeric operands.
pub mod binary;

/// Builtin function evaluation.
///
/// Holds the builtin table, arity checking and the per-family handlers.
pub mod function;

/// Utility functions for evaluation.
///
/// Argument flattening and scalar extraction shared by the builtins.
pub mod utils;

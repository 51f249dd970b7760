/// The `Value` enum and its conversions.
///
/// Defines the three runtime value shapes (number, vector, matrix), the
/// accessors the evaluator uses to check argument types, and the flattening
/// rule that turns any value into a sequence of scalars.
pub mod core;
/// Dense row-major matrices.
pub mod matrix;
/// Rendering of values for display.
///
/// Implements the display contract: 10 significant digits for scalars,
/// 6 for collection elements, and hexadecimal, octal or binary rendering of
/// integral scalars when a non-decimal base is selected.
pub mod format;

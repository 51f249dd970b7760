/// Shunting-yard conversion and the parser entry point.
///
/// Converts the token stream to postfix order while counting function
/// arguments, then hands the postfix sequence to the tree builder.
pub mod core;

/// Binary operator recognition.
///
/// Maps operator tokens to [`crate::ast::BinaryOperator`] values.
pub mod binary;

/// Postfix-to-tree reconstruction.
///
/// Rebuilds the expression tree from postfix order using an operand stack and
/// reports operand or argument underflow.
pub mod postfix;

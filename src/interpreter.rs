/// The evaluator module walks expression trees and computes values.
///
/// It applies the arithmetic and bitwise operators, dispatches the builtin
/// functions through a static table and reports runtime errors such as
/// division by zero, domain violations and mismatched dimensions.
///
/// # Responsibilities
/// - Evaluates tree nodes left to right, stopping at the first error.
/// - Checks builtin arity before evaluating any argument.
/// - Holds the `EngineContext` that carries the mode and display base.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads raw text and produces a flat list of tokens with their byte
/// offsets: numbers in four bases, function names, operators and
/// punctuation. A synthetic end token closes every stream.
///
/// # Responsibilities
/// - Converts the input into tokens with source offsets.
/// - Reads decimal, hexadecimal, octal and binary literals.
/// - Reports unexpected characters and malformed numbers.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// Parsing runs in two passes: a shunting-yard pass that produces postfix
/// order and counts function arguments, followed by a stack-based rebuild of
/// the tree.
pub mod parser;
/// The value module defines the runtime data types.
///
/// A value is a number, a vector or a matrix. This module also owns the
/// display formatting of values in every supported base.
pub mod value;

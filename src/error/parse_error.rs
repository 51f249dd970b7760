use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character that does not start any token.
    #[error("Unexpected character '{character}' at position {offset}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        offset:    usize,
    },
    /// A numeric literal could not be read in its base.
    #[error("Invalid number '{literal}' at position {offset}.")]
    MalformedNumber {
        /// The literal text as written.
        literal: String,
        /// Byte offset where the literal starts.
        offset:  usize,
    },
    /// A comma appeared outside of any parenthesized argument list.
    #[error("Misplaced comma at position {offset}.")]
    MisplacedComma {
        /// Byte offset of the comma.
        offset: usize,
    },
    /// A `(` was never closed or a `)` was never opened.
    #[error("Mismatched parentheses at position {offset}.")]
    MismatchedParentheses {
        /// Byte offset of the unmatched parenthesis.
        offset: usize,
    },
    /// A binary operator did not have two operands.
    #[error("Not enough operands for '{operator}' at position {offset}.")]
    NotEnoughOperands {
        /// The operator symbol.
        operator: String,
        /// Byte offset of the operator.
        offset:   usize,
    },
    /// A function call recorded more arguments than were produced.
    #[error("Not enough arguments for function '{name}' at position {offset}: expected {expected}, found {found}.")]
    NotEnoughArguments {
        /// The function name.
        name:     String,
        /// The recorded arity.
        expected: usize,
        /// The operands that were available.
        found:    usize,
        /// Byte offset of the function name.
        offset:   usize,
    },
    /// The input contained no expression at all.
    #[error("Empty expression.")]
    EmptyExpression,
    /// The input produced more than one independent expression.
    #[error("Invalid expression: unexpected operand at position {offset}.")]
    InvalidExpression {
        /// Byte offset of the first surplus operand.
        offset: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error refers to, if any.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedCharacter { offset, .. }
            | Self::MalformedNumber { offset, .. }
            | Self::MisplacedComma { offset }
            | Self::MismatchedParentheses { offset }
            | Self::NotEnoughOperands { offset, .. }
            | Self::NotEnoughArguments { offset, .. }
            | Self::InvalidExpression { offset } => Some(*offset),
            Self::EmptyExpression => None,
        }
    }

    /// Returns `true` for errors raised by the lexer rather than the parser.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self,
                 Self::UnexpectedCharacter { .. } | Self::MalformedNumber { .. })
    }
}

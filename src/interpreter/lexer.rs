use logos::Logos;
use tracing::trace;

use crate::{error::ParseError, interpreter::parser::core::ParseResult, util::num::i64_to_f64};

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Numbers in all four bases collapse into [`Token::Number`]; every identifier
/// becomes a [`Token::Function`] and is only resolved by the evaluator.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens: decimal (`42`, `3.14`, `.5`, `6.02e23`),
    /// hexadecimal (`0xFF`), binary (`0b1010`) or octal (`0755`).
    ///
    /// Only the first character is matched here; `lex_number` consumes the
    /// rest of the literal and classifies it by prefix.
    #[regex(r"[0-9]|\.[0-9]", lex_number)]
    Number(f64),
    /// Identifier tokens such as `gcd` or `vec_dot`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Function(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `~`
    #[token("~")]
    Tilde,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// End of input. Never matched; appended by [`tokenize`].
    End,
    /// Whitespace.
    #[regex(r"[ \t\n\r\x0B\x0C]+", logos::skip)]
    Ignored,
}

/// A token together with the text it was read from and its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The token kind and payload.
    pub token:  Token,
    /// The raw source text of the token.
    pub text:   String,
    /// Byte offset of the first character of the token.
    pub offset: usize,
}

/// Splits an expression into tokens.
///
/// The returned sequence always ends with a single [`Token::End`] lexeme
/// positioned at the end of the input.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// - `Ok(Vec<Lexeme>)`: The token stream.
/// - `Err(ParseError::MalformedNumber)`: If a numeric literal is invalid in its
///   base (e.g. `09`, `0x`, or a hex literal wider than 64 bits).
/// - `Err(ParseError::UnexpectedCharacter)`: If a character starts no token.
///
/// # Example
/// ```
/// use multicalc::{interpreter::lexer::Token, tokenize};
///
/// let tokens = tokenize("0xFF & 017").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|l| l.token).collect();
/// assert_eq!(kinds, vec![Token::Number(255.0), Token::Ampersand, Token::Number(15.0), Token::End]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Lexeme>> {
    let mut lexemes = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        let text = lexer.slice();
        match token {
            Ok(token) => lexemes.push(Lexeme { token,
                                               text: text.to_string(),
                                               offset }),
            Err(()) => return Err(lex_error(text, offset)),
        }
    }

    lexemes.push(Lexeme { token:  Token::End,
                          text:   String::new(),
                          offset: source.len(), });

    trace!(count = lexemes.len(), "tokenized expression");
    Ok(lexemes)
}

/// Classifies a slice the lexer could not turn into a token.
fn lex_error(text: &str, offset: usize) -> ParseError {
    match text.chars().next() {
        Some(c) if c.is_ascii_digit() || c == '.' => {
            ParseError::MalformedNumber { literal: text.to_string(),
                                          offset }
        },
        Some(character) => ParseError::UnexpectedCharacter { character, offset },
        None => ParseError::UnexpectedCharacter { character: '\0',
                                                  offset },
    }
}

/// Reads a whole numeric literal starting at the current token.
///
/// The literal extends over every following `[0-9A-Za-z_.]` byte, plus a
/// sign directly after a decimal exponent marker. Trailing garbage such as
/// `1.2.3` or `12ab` therefore stays inside the literal and is rejected with
/// it instead of splitting into several tokens.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the first character of the
///   literal.
///
/// # Returns
/// - `Some(f64)`: The value of the literal.
/// - `None`: If the literal is malformed in its base or not finite.
fn lex_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    let rest = lex.remainder().as_bytes();
    let prefixed = lex.slice() == "0" && matches!(rest.first(), Some(b'x' | b'X' | b'b' | b'B'));

    let mut len = 0;
    while let Some(&b) = rest.get(len)
          && (b.is_ascii_alphanumeric() || b == b'_' || b == b'.')
    {
        len += 1;
        if !prefixed && matches!(b, b'e' | b'E') && matches!(rest.get(len), Some(b'+' | b'-')) {
            len += 1;
        }
    }
    lex.bump(len);

    literal_value(lex.slice())
}

/// Converts a complete literal by its prefix.
///
/// - `0x`/`0X` and `0b`/`0B` read hexadecimal and binary digits.
/// - A leading `0` followed by a digit reads octal digits only, so a fraction
///   or an exponent after it is malformed.
/// - Anything else must be a finite decimal float.
fn literal_value(literal: &str) -> Option<f64> {
    match literal.as_bytes() {
        [b'0', b'x' | b'X', ..] => parse_radix(&literal[2..], 16),
        [b'0', b'b' | b'B', ..] => parse_radix(&literal[2..], 2),
        [b'0', b'0'..=b'9', ..] => parse_radix(&literal[1..], 8),
        _ => literal.parse::<f64>().ok().filter(|value| value.is_finite()),
    }
}

/// Parses the digits of a prefixed integer literal in the given radix.
///
/// The digits are read as an unsigned 64-bit pattern and reinterpreted as a
/// two's-complement `i64`, so `0xFFFFFFFFFFFFFFFF` is `-1`. The result is
/// stored as an `f64`, which is exact only up to 2^53: wider patterns such as
/// `0x7FFFFFFFFFFFFFFF` round to the nearest representable value.
///
/// # Parameters
/// - `digits`: The literal without its base prefix.
/// - `radix`: 2, 8 or 16.
///
/// # Returns
/// - `Some(f64)`: The value of the literal.
/// - `None`: If there are no digits, a digit is invalid in the radix, or the
///   literal exceeds 64 bits.
#[allow(clippy::cast_possible_wrap)]
fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let bits = u64::from_str_radix(digits, radix).ok()?;
    Some(i64_to_f64(bits as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|l| l.token).collect()
    }

    #[test]
    fn numbers_in_all_bases() {
        assert_eq!(kinds("42 3.5 .25 1e3 2.5E-1"),
                   vec![Token::Number(42.0),
                        Token::Number(3.5),
                        Token::Number(0.25),
                        Token::Number(1000.0),
                        Token::Number(0.25),
                        Token::End]);
        assert_eq!(kinds("0x1f 0XFF 0b101 0B1 0755 0"),
                   vec![Token::Number(31.0),
                        Token::Number(255.0),
                        Token::Number(5.0),
                        Token::Number(1.0),
                        Token::Number(493.0),
                        Token::Number(0.0),
                        Token::End]);
    }

    #[test]
    fn hex_is_twos_complement() {
        assert_eq!(kinds("0xFFFFFFFFFFFFFFFF"), vec![Token::Number(-1.0), Token::End]);
    }

    #[test]
    fn operators_and_punctuation() {
        assert_eq!(kinds("(1<<2)>>[3],~"),
                   vec![Token::LParen,
                        Token::Number(1.0),
                        Token::ShiftLeft,
                        Token::Number(2.0),
                        Token::RParen,
                        Token::ShiftRight,
                        Token::LBracket,
                        Token::Number(3.0),
                        Token::RBracket,
                        Token::Comma,
                        Token::Tilde,
                        Token::End]);
    }

    #[test]
    fn identifiers_become_functions() {
        assert_eq!(kinds("nCr vec_dot _x1"),
                   vec![Token::Function("nCr".into()),
                        Token::Function("vec_dot".into()),
                        Token::Function("_x1".into()),
                        Token::End]);
    }

    #[test]
    fn offsets_and_text() {
        let lexemes = tokenize("  12 +\tab").unwrap();
        assert_eq!(lexemes[0].offset, 2);
        assert_eq!(lexemes[0].text, "12");
        assert_eq!(lexemes[1].offset, 5);
        assert_eq!(lexemes[2].offset, 7);
        assert_eq!(lexemes[3].token, Token::End);
        assert_eq!(lexemes[3].offset, 9);
    }

    #[test]
    fn single_angle_bracket_is_rejected() {
        assert_eq!(tokenize("1 < 2"),
                   Err(ParseError::UnexpectedCharacter { character: '<',
                                                         offset:    2, }));
        assert!(matches!(tokenize("3 $ 4"),
                         Err(ParseError::UnexpectedCharacter { character: '$',
                                                               offset:    2, })));
    }

    #[test]
    fn malformed_literals() {
        assert!(matches!(tokenize("09"), Err(ParseError::MalformedNumber { offset: 0, .. })));
        assert!(matches!(tokenize("1 + 0x"), Err(ParseError::MalformedNumber { offset: 4, .. })));
        assert!(matches!(tokenize("0x1FFFFFFFFFFFFFFFF"),
                         Err(ParseError::MalformedNumber { .. })));
    }

    #[test]
    fn literals_are_read_whole() {
        for source in ["0755.0", "010e1", "08.5", "1e", "1e+", "1..2", "1.2.3", "12ab", "0x1G", "0b102"] {
            let err = tokenize(source).unwrap_err();
            assert_eq!(err,
                       ParseError::MalformedNumber { literal: source.to_string(),
                                                     offset:  0, },
                       "{source}");
        }
        assert!(matches!(tokenize("2 * 1e+"), Err(ParseError::MalformedNumber { offset: 4, .. })));
    }

    #[test]
    fn non_finite_literals_are_rejected() {
        assert!(matches!(tokenize("1e400"), Err(ParseError::MalformedNumber { offset: 0, .. })));
        assert_eq!(kinds("1e-400"), vec![Token::Number(0.0), Token::End]);
    }

    #[test]
    fn exponent_sign_belongs_to_decimal_literals_only() {
        assert_eq!(kinds("1e+2 2E-1"), vec![Token::Number(100.0), Token::Number(0.2), Token::End]);
        assert_eq!(kinds("0xE+1"),
                   vec![Token::Number(14.0), Token::Plus, Token::Number(1.0), Token::End]);
        assert_eq!(kinds("0b1-1"),
                   vec![Token::Number(1.0), Token::Minus, Token::Number(1.0), Token::End]);
    }
}

use crate::{ast::BinaryOperator, interpreter::lexer::Token};

/// Maps a token to its binary operator, if it is one.
///
/// # Parameters
/// - `token`: The token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` for operator tokens, `None` otherwise.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Rem),
        Token::Ampersand => Some(BinaryOperator::BitAnd),
        Token::Pipe => Some(BinaryOperator::BitOr),
        Token::Caret => Some(BinaryOperator::BitXor),
        Token::ShiftLeft => Some(BinaryOperator::ShiftLeft),
        Token::ShiftRight => Some(BinaryOperator::ShiftRight),
        Token::Tilde => Some(BinaryOperator::Tilde),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operator_token_maps() {
        let tokens = [Token::Plus,
                      Token::Minus,
                      Token::Star,
                      Token::Slash,
                      Token::Percent,
                      Token::Ampersand,
                      Token::Pipe,
                      Token::Caret,
                      Token::ShiftLeft,
                      Token::ShiftRight,
                      Token::Tilde];
        for token in &tokens {
            assert!(token_to_binary_operator(token).is_some(), "{token:?}");
        }
        assert_eq!(token_to_binary_operator(&Token::Comma), None);
        assert_eq!(token_to_binary_operator(&Token::Number(1.0)), None);
    }
}

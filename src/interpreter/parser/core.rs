use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token, tokenize},
        parser::{
            binary::token_to_binary_operator,
            postfix::{PostfixItem, build_tree},
        },
    },
};

/// Result type used by the lexer and the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// An entry on the shunting-yard operator stack.
#[derive(Debug)]
enum StackEntry {
    Operator { op: BinaryOperator, offset: usize },
    Function { name: String, offset: usize },
    LParen { offset: usize },
}

/// Parses an expression into a tree.
///
/// This is the entry point for parsing. The text is tokenized, converted to
/// postfix order with [`to_postfix`] and rebuilt into a tree.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The root expression node.
///
/// # Example
/// ```
/// use multicalc::{ast::Expr, parse};
///
/// let expr = parse("gcd(12, 18) << 1").unwrap();
/// assert_eq!(expr.to_string(), "(gcd(12, 18) << 1)");
///
/// assert!(parse("(3 + 4").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let lexemes = tokenize(source)?;
    let postfix = to_postfix(&lexemes)?;
    build_tree(postfix)
}

/// Converts a token stream to postfix order.
///
/// This is a shunting-yard pass extended with a stack of argument counters.
/// A counter is opened when a function name is directly followed by `(`,
/// incremented on every comma whose nearest open parenthesis is on top of the
/// operator stack, and closed when the `)` before the function is reached.
/// Brackets are accepted by the lexer but play no part here.
///
/// # Parameters
/// - `lexemes`: Tokens as returned by [`tokenize`].
///
/// # Returns
/// The postfix sequence.
///
/// # Errors
/// - `MisplacedComma` if a comma has no enclosing `(`.
/// - `MismatchedParentheses` for an unmatched `(` or `)`.
pub fn to_postfix(lexemes: &[Lexeme]) -> ParseResult<Vec<PostfixItem>> {
    let mut output = Vec::with_capacity(lexemes.len());
    let mut stack: Vec<StackEntry> = Vec::new();
    let mut arg_counts: Vec<usize> = Vec::new();

    for (i, lexeme) in lexemes.iter().enumerate() {
        let offset = lexeme.offset;
        match &lexeme.token {
            Token::Number(value) => output.push(PostfixItem::Number { value: *value,
                                                                      offset }),
            Token::Function(name) => {
                stack.push(StackEntry::Function { name: name.clone(),
                                                  offset });
                if let Some(next) = lexemes.get(i + 1)
                   && next.token == Token::LParen
                {
                    arg_counts.push(0);
                }
            },
            Token::Comma => {
                loop {
                    match stack.last() {
                        Some(StackEntry::LParen { .. }) => break,
                        Some(_) => {
                            if let Some(entry) = stack.pop() {
                                emit(entry, 0, &mut output);
                            }
                        },
                        None => return Err(ParseError::MisplacedComma { offset }),
                    }
                }
                if let Some(count) = arg_counts.last_mut() {
                    *count += 1;
                }
            },
            Token::LParen => stack.push(StackEntry::LParen { offset }),
            Token::RParen => {
                let empty_call = i > 0 && lexemes[i - 1].token == Token::LParen;
                close_paren(&mut stack, &mut arg_counts, &mut output, empty_call, offset)?;
            },
            Token::LBracket | Token::RBracket | Token::End | Token::Ignored => {},
            token => {
                if let Some(op) = token_to_binary_operator(token) {
                    while let Some(StackEntry::Operator { op: top, .. }) = stack.last()
                          && top.precedence() >= op.precedence()
                    {
                        if let Some(entry) = stack.pop() {
                            emit(entry, 0, &mut output);
                        }
                    }
                    stack.push(StackEntry::Operator { op, offset });
                }
            },
        }
    }

    while let Some(entry) = stack.pop() {
        if let StackEntry::LParen { offset } = entry {
            return Err(ParseError::MismatchedParentheses { offset });
        }
        emit(entry, 0, &mut output);
    }

    trace!(length = output.len(), "converted to postfix");
    Ok(output)
}

/// Handles a `)`: pops operators down to the matching `(` and, when a
/// function sits beneath it, emits the call with its counted arity.
fn close_paren(stack: &mut Vec<StackEntry>,
               arg_counts: &mut Vec<usize>,
               output: &mut Vec<PostfixItem>,
               empty_call: bool,
               offset: usize)
               -> ParseResult<()> {
    loop {
        match stack.pop() {
            Some(StackEntry::LParen { .. }) => break,
            Some(entry) => emit(entry, 0, output),
            None => return Err(ParseError::MismatchedParentheses { offset }),
        }
    }

    if let Some(StackEntry::Function { .. }) = stack.last()
       && let Some(function) = stack.pop()
    {
        let counted = arg_counts.pop().map_or(1, |commas| commas + 1);
        let arity = if empty_call { 0 } else { counted };
        emit(function, arity, output);
    }
    Ok(())
}

/// Appends an operator or function stack entry to the output.
///
/// `arity` is only used for functions. Parentheses are never emitted.
fn emit(entry: StackEntry, arity: usize, output: &mut Vec<PostfixItem>) {
    match entry {
        StackEntry::Operator { op, offset } => output.push(PostfixItem::Operator { op, offset }),
        StackEntry::Function { name, offset } => {
            output.push(PostfixItem::Function { name, arity, offset });
        },
        StackEntry::LParen { .. } => {},
    }
}

use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// One entry of the postfix sequence produced by the shunting-yard pass.
#[derive(Debug, Clone, PartialEq)]
pub enum PostfixItem {
    /// A literal operand.
    Number {
        /// The literal value.
        value:  f64,
        /// Byte offset of the literal.
        offset: usize,
    },
    /// A binary operator consuming the two previous operands.
    Operator {
        /// The operator.
        op:     BinaryOperator,
        /// Byte offset of the operator.
        offset: usize,
    },
    /// A function call consuming `arity` previous operands.
    Function {
        /// Name of the function.
        name:   String,
        /// Number of arguments counted while parsing.
        arity:  usize,
        /// Byte offset of the function name.
        offset: usize,
    },
}

/// Rebuilds an expression tree from a postfix sequence.
///
/// Operands are pushed onto a stack. An operator pops its right and then its
/// left operand; a function pops its recorded arity and keeps the arguments
/// in source order.
///
/// # Parameters
/// - `postfix`: The postfix sequence, consumed.
///
/// # Returns
/// - `Ok(Expr)`: The single root expression.
/// - `Err(ParseError::NotEnoughOperands)`: An operator found fewer than two
///   operands.
/// - `Err(ParseError::NotEnoughArguments)`: A function's arity exceeds the
///   operands available.
/// - `Err(ParseError::EmptyExpression)`: Nothing was produced.
/// - `Err(ParseError::InvalidExpression)`: More than one root remained.
pub fn build_tree(postfix: Vec<PostfixItem>) -> ParseResult<Expr> {
    trace!(length = postfix.len(), "rebuilding tree from postfix");
    let mut stack: Vec<Expr> = Vec::with_capacity(postfix.len());

    for item in postfix {
        match item {
            PostfixItem::Number { value, offset } => stack.push(Expr::Number { value, offset }),
            PostfixItem::Operator { op, offset } => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(ParseError::NotEnoughOperands { operator: op.to_string(),
                                                               offset });
                };
                stack.push(Expr::BinaryOp { op,
                                            left: Box::new(left),
                                            right: Box::new(right),
                                            offset });
            },
            PostfixItem::Function { name, arity, offset } => {
                if arity > stack.len() {
                    return Err(ParseError::NotEnoughArguments { name,
                                                                expected: arity,
                                                                found: stack.len(),
                                                                offset });
                }
                let arguments = stack.split_off(stack.len() - arity);
                stack.push(Expr::FunctionCall { name,
                                                arguments,
                                                offset });
            },
        }
    }

    match stack.len() {
        0 => Err(ParseError::EmptyExpression),
        1 => stack.pop().ok_or(ParseError::EmptyExpression),
        _ => Err(ParseError::InvalidExpression { offset: stack[1].offset() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: f64, offset: usize) -> PostfixItem {
        PostfixItem::Number { value, offset }
    }

    #[test]
    fn operator_takes_left_then_right() {
        let tree = build_tree(vec![number(8.0, 0),
                                   number(2.0, 4),
                                   PostfixItem::Operator { op:     BinaryOperator::Sub,
                                                           offset: 2, }]).unwrap();
        assert_eq!(tree.to_string(), "(8 - 2)");
    }

    #[test]
    fn function_arguments_keep_source_order() {
        let tree = build_tree(vec![number(1.0, 0),
                                   number(2.0, 0),
                                   number(3.0, 0),
                                   PostfixItem::Function { name:   "f".into(),
                                                           arity:  2,
                                                           offset: 0, }]);
        assert_eq!(tree, Err(ParseError::InvalidExpression { offset: 0 }));

        let tree = build_tree(vec![number(1.0, 0),
                                   number(2.0, 0),
                                   number(3.0, 0),
                                   PostfixItem::Function { name:   "f".into(),
                                                           arity:  3,
                                                           offset: 0, }]).unwrap();
        assert_eq!(tree.to_string(), "f(1, 2, 3)");
    }

    #[test]
    fn underflow_is_reported() {
        let err = build_tree(vec![number(1.0, 0),
                                  PostfixItem::Operator { op:     BinaryOperator::Add,
                                                          offset: 2, }]).unwrap_err();
        assert_eq!(err,
                   ParseError::NotEnoughOperands { operator: "+".into(),
                                                   offset:   2, });

        let err = build_tree(vec![PostfixItem::Function { name:   "gcd".into(),
                                                          arity:  2,
                                                          offset: 0, }]).unwrap_err();
        assert!(matches!(err, ParseError::NotEnoughArguments { expected: 2, found: 0, .. }));
    }

    #[test]
    fn empty_postfix_is_empty_expression() {
        assert_eq!(build_tree(Vec::new()), Err(ParseError::EmptyExpression));
    }
}

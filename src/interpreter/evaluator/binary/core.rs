use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EngineContext, EvalResult},
        value::core::Value,
    },
};

impl EngineContext {
    /// Evaluates a binary operation node.
    ///
    /// The left operand is evaluated completely before the right one and the
    /// first error is returned unchanged. Both operands must be numbers;
    /// operators never act element-wise on vectors or matrices. Arithmetic
    /// operators are routed to `eval_scalar_op` and the integer operators to
    /// `eval_bitwise_op`. A result that is NaN or infinite is rejected.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the numeric result.
    ///
    /// # Example
    /// ```
    /// use multicalc::{EngineContext, Value, ast::{BinaryOperator, Expr}};
    ///
    /// let context = EngineContext::default();
    /// let left = Expr::Number { value: 3.0, offset: 0 };
    /// let right = Expr::Number { value: 4.0, offset: 4 };
    ///
    /// let result = context.eval_binary_op(BinaryOperator::Mul, &left, &right);
    /// assert_eq!(result.unwrap(), Value::Number(12.0));
    /// ```
    pub fn eval_binary_op(&self,
                          op: BinaryOperator,
                          left: &Expr,
                          right: &Expr)
                          -> EvalResult<Value> {
        use BinaryOperator::{
            Add, BitAnd, BitOr, BitXor, Div, Mul, Rem, ShiftLeft, ShiftRight, Sub, Tilde,
        };

        let left = self.eval(left)?;
        let right = self.eval(right)?;

        let (Value::Number(a), Value::Number(b)) = (&left, &right) else {
            return Err(RuntimeError::NonNumericOperands { operator: op.symbol().to_string() });
        };

        let result = match op {
            Add | Sub | Mul | Div | Rem => Self::eval_scalar_op(op, *a, *b)?,
            BitAnd | BitOr | BitXor | ShiftLeft | ShiftRight => Self::eval_bitwise_op(op, *a, *b)?,
            Tilde => {
                return Err(RuntimeError::Unsupported { details: "'~' is not a binary operator; use bnot(x)".to_string() });
            },
        };

        if !result.is_finite() {
            return Err(RuntimeError::Domain { details: format!("{a} {op} {b} is not a finite number") });
        }
        Ok(Value::Number(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(value: f64) -> Expr {
        Expr::Number { value, offset: 0 }
    }

    fn apply(op: BinaryOperator, left: Expr, right: Expr) -> EvalResult<Value> {
        EngineContext::default().eval_binary_op(op, &left, &right)
    }

    #[test]
    fn vectors_are_rejected() {
        let vector = Expr::FunctionCall { name:      "vector".into(),
                                          arguments: vec![num(1.0), num(2.0)],
                                          offset:    0, };
        let err = apply(BinaryOperator::Add, vector, num(1.0)).unwrap_err();
        assert_eq!(err, RuntimeError::NonNumericOperands { operator: "+".into() });
    }

    #[test]
    fn non_finite_results_are_domain_errors() {
        let err = apply(BinaryOperator::Mul, num(1e308), num(10.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::Domain { .. }));
        let err = apply(BinaryOperator::Rem, num(5.0), num(0.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::Domain { .. }));
    }

    #[test]
    fn left_error_wins() {
        let bad = Expr::FunctionCall { name:      "nope".into(),
                                       arguments: vec![],
                                       offset:    0, };
        let worse = Expr::BinaryOp { op:     BinaryOperator::Div,
                                     left:   Box::new(num(1.0)),
                                     right:  Box::new(num(0.0)),
                                     offset: 0, };
        let err = apply(BinaryOperator::Add, bad, worse).unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownFunction { .. }));
    }

    #[test]
    fn tilde_is_unsupported() {
        let err = apply(BinaryOperator::Tilde, num(1.0), num(2.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::Unsupported { .. }));
    }
}

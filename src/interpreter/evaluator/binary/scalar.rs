use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EngineContext, EvalResult},
};

impl EngineContext {
    /// Evaluates a floating-point arithmetic operation.
    ///
    /// `/` checks for a zero divisor explicitly. `%` is the floating-point
    /// remainder whose sign follows the dividend, so `-7 % 3` is `-1`.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul`, `Div` or `Rem`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The raw result; the caller rejects non-finite values.
    pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Rem, Sub};

        match op {
            Add => Ok(left + right),
            Sub => Ok(left - right),
            Mul => Ok(left * right),
            Div => {
                if right == 0.0 {
                    return Err(RuntimeError::division_by_zero(format!("{left} / 0")));
                }
                Ok(left / right)
            },
            Rem => Ok(left % right),
            _ => Err(RuntimeError::Unsupported { details: format!("'{op}' is not an arithmetic operator") }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(EngineContext::eval_scalar_op(BinaryOperator::Add, 1.5, 2.0), Ok(3.5));
        assert_eq!(EngineContext::eval_scalar_op(BinaryOperator::Sub, 1.0, 3.0), Ok(-2.0));
        assert_eq!(EngineContext::eval_scalar_op(BinaryOperator::Div, 7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn remainder_follows_dividend() {
        assert_eq!(EngineContext::eval_scalar_op(BinaryOperator::Rem, -7.0, 3.0), Ok(-1.0));
        assert_eq!(EngineContext::eval_scalar_op(BinaryOperator::Rem, 7.5, 2.0), Ok(1.5));
    }

    #[test]
    fn division_by_zero() {
        let err = EngineContext::eval_scalar_op(BinaryOperator::Div, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
        let err = EngineContext::eval_scalar_op(BinaryOperator::Div, 1.0, -0.0).unwrap_err();
        assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
    }
}

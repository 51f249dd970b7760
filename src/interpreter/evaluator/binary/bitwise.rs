use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EngineContext, EvalResult},
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

impl EngineContext {
    /// Evaluates a bitwise or shift operation.
    ///
    /// Both operands are truncated toward zero to `i64`. Shifts require an
    /// amount in `0..=63`; `>>` is arithmetic, so negative values keep their
    /// sign. `<<` discards bits shifted past bit 63.
    ///
    /// # Parameters
    /// - `op`: One of `BitAnd`, `BitOr`, `BitXor`, `ShiftLeft` or `ShiftRight`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The integer result converted back to `f64`.
    ///
    /// # Example
    /// ```
    /// use multicalc::{EngineContext, ast::BinaryOperator};
    ///
    /// let r = EngineContext::eval_bitwise_op(BinaryOperator::BitXor, 12.0, 10.0).unwrap();
    /// assert_eq!(r, 6.0);
    /// ```
    pub fn eval_bitwise_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{BitAnd, BitOr, BitXor, ShiftLeft, ShiftRight};

        let what = op.symbol();
        let a = f64_to_i64_truncated(left, what)?;
        let b = f64_to_i64_truncated(right, what)?;

        let result = match op {
            BitAnd => a & b,
            BitOr => a | b,
            BitXor => a ^ b,
            ShiftLeft | ShiftRight => {
                let amount = u32::try_from(b).ok()
                                             .filter(|n| *n <= 63)
                                             .ok_or_else(|| {
                                                 RuntimeError::invalid_argument(format!("shift amount {b} is outside 0..=63"))
                                             })?;
                if op == ShiftLeft { a << amount } else { a >> amount }
            },
            _ => {
                return Err(RuntimeError::Unsupported { details: format!("'{op}' is not a bitwise operator") });
            },
        };
        Ok(i64_to_f64(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitwise(op: BinaryOperator, a: f64, b: f64) -> EvalResult<f64> {
        EngineContext::eval_bitwise_op(op, a, b)
    }

    #[test]
    fn logical_operators_truncate() {
        assert_eq!(bitwise(BinaryOperator::BitAnd, 12.9, 10.0), Ok(8.0));
        assert_eq!(bitwise(BinaryOperator::BitOr, 12.0, 3.0), Ok(15.0));
        assert_eq!(bitwise(BinaryOperator::BitAnd, -1.0, 255.0), Ok(255.0));
    }

    #[test]
    fn shifts() {
        assert_eq!(bitwise(BinaryOperator::ShiftLeft, 1.0, 10.0), Ok(1024.0));
        assert_eq!(bitwise(BinaryOperator::ShiftRight, -16.0, 2.0), Ok(-4.0));
        assert_eq!(bitwise(BinaryOperator::ShiftLeft, 1.0, 63.0), Ok(i64_to_f64(i64::MIN)));
        for amount in [-1.0, 64.0] {
            let err = bitwise(BinaryOperator::ShiftLeft, 1.0, amount).unwrap_err();
            assert!(matches!(err, RuntimeError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn out_of_range_operands() {
        assert!(matches!(bitwise(BinaryOperator::BitOr, 1e20, 1.0),
                         Err(RuntimeError::Overflow { .. })));
    }
}

use crate::{ast::Operator, error::EvalError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Applies a binary arithmetic operator to two integers.
///
/// Addition, subtraction and multiplication use checked arithmetic and
/// report overflow explicitly. Division truncates toward zero; a zero
/// divisor is rejected before dividing.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand value.
/// - `right`: Right operand value.
///
/// # Returns
/// The computed integer result.
///
/// # Errors
/// - `DivisionByZero` if `op` is `Div` and `right` is zero.
/// - `Overflow` if the operation overflows `i64`.
///
/// # Example
/// ```
/// use romana::{ast::Operator, interpreter::evaluator::eval_binary_op};
///
/// assert_eq!(eval_binary_op(Operator::Add, 3, 2).unwrap(), 5);
/// assert_eq!(eval_binary_op(Operator::Div, 7, 2).unwrap(), 3);
/// assert!(eval_binary_op(Operator::Div, 10, 0).is_err());
/// ```
pub fn eval_binary_op(op: Operator, left: i64, right: i64) -> EvalResult<i64> {
    match op {
        Operator::Add => left.checked_add(right).ok_or(EvalError::Overflow),
        Operator::Sub => left.checked_sub(right).ok_or(EvalError::Overflow),
        Operator::Mul => left.checked_mul(right).ok_or(EvalError::Overflow),
        Operator::Div => {
            if right == 0 {
                return Err(EvalError::DivisionByZero);
            }
            left.checked_div(right).ok_or(EvalError::Overflow)
        },
    }
}

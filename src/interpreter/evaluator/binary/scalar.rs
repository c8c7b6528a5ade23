use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Evaluates a scalar arithmetic operation.
///
/// Results follow IEEE-754 double precision. Division by zero is checked
/// explicitly: a divisor equal to `0.0` (either sign) fails, while any
/// nonzero divisor, however small, divides normally.
///
/// # Parameters
/// - `op`: The arithmetic operator, one of `Add`, `Sub`, `Mul` or `Div`.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Position of the operator for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed scalar.
///
/// # Panics
/// If `op` is `Mod` or `Pow`; those are routed to their own handlers by
/// `eval_binary`.
///
/// # Example
/// ```
/// use ferrocalc::{ast::BinaryOperator, interpreter::evaluator::binary::scalar::eval_scalar_op};
///
/// let result = eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0, 1).unwrap();
/// assert_eq!(result, 3.0);
///
/// let result = eval_scalar_op(BinaryOperator::Div, 1.0, 1e-300, 1).unwrap();
/// assert_eq!(result, 1e300);
/// ```
pub fn eval_scalar_op(op: BinaryOperator,
                      left: f64,
                      right: f64,
                      position: usize)
                      -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

    match op {
        Add => Ok(left + right),
        Sub => Ok(left - right),
        Mul => Ok(left * right),
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            Ok(left / right)
        },
        Mod | Pow => unreachable!("{op} is not a scalar operator"),
    }
}

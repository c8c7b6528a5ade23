use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::{
        binary::{modulo::eval_mod, power::eval_pow, scalar::eval_scalar_op},
        core::EvalResult,
    },
};

/// Evaluates a binary operation between two values.
///
/// Arithmetic operators `+ - * /` are handled by [`eval_scalar_op`], modulo
/// by [`eval_mod`] and exponentiation by [`eval_pow`].
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Position of the operator for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the evaluated result.
///
/// # Example
/// ```
/// use ferrocalc::{ast::BinaryOperator, interpreter::evaluator::binary::core::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Add, 3.0, 4.0, 1).unwrap(), 7.0);
/// assert_eq!(eval_binary(BinaryOperator::Pow, 2.0, 10.0, 1).unwrap(), 1024.0);
/// assert!(eval_binary(BinaryOperator::Div, 1.0, 0.0, 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, position: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

    log::trace!("evaluating {left} {op} {right}");

    match op {
        Add | Sub | Mul | Div => eval_scalar_op(op, left, right, position),
        Mod => eval_mod(left, right, position),
        Pow => eval_pow(left, right, position),
    }
}

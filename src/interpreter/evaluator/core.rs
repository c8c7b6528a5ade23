use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{binary::core::eval_binary, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns its value.
///
/// This is the main entry point for expression evaluation. The evaluator
/// dispatches on the node variant and reduces children before applying the
/// operator, left operand first. Evaluation holds no state, so the same tree
/// always yields the same result.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The computed `f64`.
///
/// # Errors
/// Any [`RuntimeError`] raised by an operator in the tree. The first failing
/// operator in evaluation order is reported.
///
/// # Example
/// ```
/// use ferrocalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::core::eval,
/// };
///
/// let expr = Expr::BinaryOp { left:     Box::new(Expr::Number { value:    7.0,
///                                                               position: 0, }),
///                             op:       BinaryOperator::Mod,
///                             right:    Box::new(Expr::Number { value:    -3.0,
///                                                               position: 2, }),
///                             position: 1, };
///
/// assert_eq!(eval(&expr).unwrap(), -2.0);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),
        Expr::UnaryOp { op, expr, .. } => {
            let value = eval(expr)?;
            Ok(eval_unary(*op, value))
        },
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            let left = eval(left)?;
            let right = eval(right)?;
            eval_binary(*op, left, right, *position)
        },
    }
}

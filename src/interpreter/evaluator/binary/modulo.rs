use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Evaluates `left % right` as a floored remainder.
///
/// The result takes the sign of the divisor, so `-7 % 3` is `2` and
/// `7 % -3` is `-2`. A zero remainder carries the divisor's sign as well.
/// A divisor equal to `0.0` fails instead of producing `NaN`.
///
/// # Parameters
/// - `left`: Dividend.
/// - `right`: Divisor.
/// - `position`: Position of the operator for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the remainder.
///
/// # Example
/// ```
/// use ferrocalc::interpreter::evaluator::binary::modulo::eval_mod;
///
/// assert_eq!(eval_mod(7.0, 3.0, 1).unwrap(), 1.0);
/// assert_eq!(eval_mod(-7.0, 3.0, 1).unwrap(), 2.0);
/// assert_eq!(eval_mod(7.0, -3.0, 1).unwrap(), -2.0);
/// assert_eq!(eval_mod(5.5, 2.0, 1).unwrap(), 1.5);
/// assert!(eval_mod(5.0, 0.0, 1).is_err());
/// ```
pub fn eval_mod(left: f64, right: f64, position: usize) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::ModuloByZero { position });
    }

    let remainder = left % right;

    if remainder == 0.0 {
        return Ok(0.0_f64.copysign(right));
    }
    if (remainder < 0.0) != (right < 0.0) {
        return Ok(remainder + right);
    }
    Ok(remainder)
}

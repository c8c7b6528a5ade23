use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Evaluates an exponentiation operation.
///
/// The result must stay within the finite real numbers. For finite operands
/// the following fail with `RuntimeError::DomainError`:
/// - a negative base with a fractional exponent, whose result is complex;
/// - a zero base with a negative exponent;
/// - a result too large to represent.
///
/// Infinite operands follow IEEE-754 `pow`.
///
/// # Parameters
/// - `base`: The base value.
/// - `exponent`: The exponent value.
/// - `position`: Position of the operator for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the result of `base ^ exponent`.
///
/// # Example
/// ```
/// use ferrocalc::interpreter::evaluator::binary::power::eval_pow;
///
/// assert_eq!(eval_pow(2.0, 10.0, 1).unwrap(), 1024.0);
/// assert_eq!(eval_pow(-2.0, 3.0, 1).unwrap(), -8.0);
/// assert_eq!(eval_pow(4.0, 0.5, 1).unwrap(), 2.0);
///
/// assert!(eval_pow(-8.0, 0.5, 1).is_err());
/// assert!(eval_pow(0.0, -1.0, 1).is_err());
/// assert!(eval_pow(10.0, 400.0, 1).is_err());
/// ```
pub fn eval_pow(base: f64, exponent: f64, position: usize) -> EvalResult<f64> {
    let domain_error = || RuntimeError::DomainError { base,
                                                      exponent,
                                                      position };

    if !base.is_finite() || !exponent.is_finite() {
        return Ok(base.powf(exponent));
    }

    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(domain_error());
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(domain_error());
    }

    let result = base.powf(exponent);
    if !result.is_finite() {
        return Err(domain_error());
    }
    Ok(result)
}

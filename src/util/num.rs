/// Returns `true` if `value` is finite and has no fractional part.
///
/// ## Example
/// ```
/// use ferrocalc::util::num::is_integral;
///
/// assert!(is_integral(4.0));
/// assert!(is_integral(-0.0));
/// assert!(!is_integral(0.5));
/// assert!(!is_integral(f64::INFINITY));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Formats an evaluation result for display.
///
/// Integral values are written without a fractional part or exponent, so
/// `14.0` reads `14` and `1e20` reads `100000000000000000000`. Every other
/// finite value uses the shortest representation that round-trips, such as
/// `0.30000000000000004`. Negative zero is written as `0`.
///
/// Returns `None` for infinities and `NaN`, which can arise from literals too
/// large for `f64` (`9...9 - 9...9`) or from overflowing products; the shell
/// reports those as errors rather than results.
///
/// ## Example
/// ```
/// use ferrocalc::util::num::format_result;
///
/// assert_eq!(format_result(14.0).as_deref(), Some("14"));
/// assert_eq!(format_result(-2.0).as_deref(), Some("-2"));
/// assert_eq!(format_result(2.5).as_deref(), Some("2.5"));
/// assert_eq!(format_result(0.1 + 0.2).as_deref(), Some("0.30000000000000004"));
/// assert_eq!(format_result(1e20).as_deref(), Some("100000000000000000000"));
/// assert_eq!(format_result(-0.0).as_deref(), Some("0"));
/// assert_eq!(format_result(f64::INFINITY), None);
/// assert_eq!(format_result(f64::NAN), None);
/// ```
#[must_use]
pub fn format_result(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    if is_integral(value) {
        if value == 0.0 {
            return Some("0".to_string());
        }
        return Some(format!("{value:.0}"));
    }
    Some(value.to_string())
}

//! Decimal normalisation of generated values.

/// Significant digits kept in a computed solution.
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Round to the given number of significant digits, suppressing floating-point noise.
pub fn round_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let precision = digits.saturating_sub(1);
    format!("{value:.precision$e}").parse().unwrap_or(value)
}

/// Round to the given number of decimal places.
pub fn round_decimals(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Split a non-negative value into its integer and fractional digit strings.
///
/// Always uses `.` as the separator and never switches to exponent notation.
/// The fractional part is empty for whole numbers.
pub fn split_digits(value: f64) -> (String, String) {
    let formatted = value.abs().to_string();
    match formatted.split_once('.') {
        Some((integer, fractional)) => (integer.to_string(), fractional.to_string()),
        None => (formatted, String::new()),
    }
}

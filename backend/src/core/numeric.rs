//! Lenient numeric parsing for CSV cell values

/// Parse a cell as `f64`, ignoring surrounding whitespace
///
/// Accepts integers, decimals and exponent forms (`"1e2"`). Returns `None`
/// for empty or non-numeric text.
///
/// # Example
/// ```
/// use geolab_core_rs::core::numeric::parse_number;
///
/// assert_eq!(parse_number(" 2.5 "), Some(2.5));
/// assert_eq!(parse_number("1e2"), Some(100.0));
/// assert_eq!(parse_number("N/A"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Round to two decimal places (half away from zero)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! Result formatting for the display
//!
//! Integral values print without a decimal point, at full width. Everything
//! else uses general formatting with [`SIGNIFICANT_DIGITS`] significant
//! digits, the same rules as C's `%.10g`: fixed notation for moderate
//! exponents, scientific notation (`3e-05`) otherwise, trailing zeros trimmed.

use crate::interpreter::constants::SIGNIFICANT_DIGITS;

/// Format a calculation result for display.
///
/// A value is treated as an integer only when it is exactly equal to its
/// own truncation; there is no tolerance.
pub fn format_result(value: f64) -> String {
    if value == value.trunc() {
        // Avoid "-0"
        if value == 0.0 {
            return "0".to_string();
        }
        format!("{:.0}", value)
    } else {
        format_general(value, SIGNIFICANT_DIGITS)
    }
}

/// `%g`-style formatting with `precision` significant digits
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    // Let the scientific formatter do the rounding, then read back the
    // decimal exponent of the rounded value.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

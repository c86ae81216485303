//! Number rendering for table rows

/// Significant digits shown for bare numbers
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Format a number with six significant digits
///
/// Trailing zeros are trimmed. Magnitudes below `1e-5` or at least `1e6`
/// switch to scientific notation.
///
/// ```
/// use tabula_core::format::format_number;
///
/// assert_eq!(format_number(0.1), "0.1");
/// assert_eq!(format_number(-0.7000000000000001), "-0.7");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// assert_eq!(format_number(0.0), "0");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let s = if n > 0.0 { "inf" } else { "-inf" };
        return s.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let precision = SIGNIFICANT_DIGITS - 1;

    // Decide on the exponent after rounding, so 999999.7 becomes 1e6
    let scientific = format!("{:.*e}", precision, n);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -5 || exponent >= SIGNIFICANT_DIGITS as i32 {
        format!("{}e{}", trim_zeros(mantissa), exponent)
    } else {
        let decimals = (precision as i32 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, n)).to_string()
    }
}

/// Strip trailing zeros after a decimal point, and the point itself
fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-1.0), "-1");
        assert_eq!(format_number(32.0), "32");
        assert_eq!(format_number(123456.0), "123456");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.30000000000000004), "0.3");
        assert_eq!(format_number(2.0_f64.sqrt()), "1.41421");
        assert_eq!(format_number(0.000123456789), "0.000123457");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(format_number(1234567.0), "1.23457e6");
        assert_eq!(format_number(-1.3877787807814457e-16), "-1.38778e-16");
        assert_eq!(format_number(1e6), "1e6");
        assert_eq!(format_number(999999.7), "1e6");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }
}

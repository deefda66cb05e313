//! Number formatting for the status line.

use crate::Float;

/// General format with `precision` significant digits.
///
/// Fixed notation keeps at least one digit after the point and drops trailing
/// zeros (`10.0`, `0.5`). Exponents below -4 or at/above `precision - 1`
/// switch to scientific notation with a signed two digit exponent
/// (`2.05e+02`), so fixed output never shows more than `precision` digits.
pub fn general(value: Float, precision: usize) -> String {
    let precision = precision.max(1);
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // Rounding first so 99.96 -> 1.00e2 lands in the right notation
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= precision as i32 - 1 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa, false), sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value), true)
    }
}

fn trim_zeros(s: &str, keep_point: bool) -> String {
    if !s.contains('.') {
        return if keep_point { format!("{}.0", s) } else { s.to_string() };
    }
    let trimmed = s.trim_end_matches('0');
    if trimmed.ends_with('.') {
        if keep_point {
            format!("{}0", trimmed)
        } else {
            trimmed.trim_end_matches('.').to_string()
        }
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::general;

    #[test]
    fn test_fixed() {
        assert_eq!(general(0.0, 3), "0.0");
        assert_eq!(general(10.0, 3), "10.0");
        assert_eq!(general(0.5, 3), "0.5");
        assert_eq!(general(-1.0, 3), "-1.0");
        assert_eq!(general(99.94, 3), "99.9");
        assert_eq!(general(3.14159, 3), "3.14");
        assert_eq!(general(0.001234, 3), "0.00123");
        assert_eq!(general(-2.5e-4, 3), "-0.00025");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(general(205.0, 3), "2.05e+02");
        assert_eq!(general(100.0, 3), "1e+02");
        assert_eq!(general(99.96, 3), "1e+02");
        assert_eq!(general(999.4, 3), "9.99e+02");
        assert_eq!(general(-109.85, 3), "-1.1e+02");
        assert_eq!(general(1234.5, 3), "1.23e+03");
        assert_eq!(general(1000.0, 3), "1e+03");
        assert_eq!(general(999.7, 3), "1e+03");
        assert_eq!(general(1e-5, 3), "1e-05");
        assert_eq!(general(-1.5e-7, 3), "-1.5e-07");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(general(f64::NAN, 3), "nan");
        assert_eq!(general(f64::INFINITY, 3), "inf");
        assert_eq!(general(f64::NEG_INFINITY, 3), "-inf");
    }
}

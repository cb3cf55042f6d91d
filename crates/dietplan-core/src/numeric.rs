//! Lenient numeric parsing and display
//!
//! Form fields are free text. Numbers are read from the longest valid prefix
//! of the field, so `"78kg"` is `78` and `"abc"` is invalid. Invalid input
//! is not rejected: it is carried into the payload as an invalid value.

/// Parse the leading integer of `input`.
///
/// Leading whitespace and one sign are accepted, followed by decimal digits
/// or a `0x` hexadecimal literal. Anything after the digits is ignored.
/// Returns `None` when no digits are present or the value does not fit `i64`.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = if let Some(hex) = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
    {
        let len = hex.bytes().take_while(|b| b.is_ascii_hexdigit()).count();
        if len == 0 {
            return None;
        }
        i128::from_str_radix(&hex[..len], 16).ok()?
    } else {
        let len = count_digits(rest.as_bytes());
        if len == 0 {
            return None;
        }
        rest[..len].parse::<i128>().ok()?
    };

    // Sign first so i64::MIN stays in range
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

/// Parse the leading decimal literal of `input`.
///
/// Accepts `digits[.digits][e[+-]digits]`, a literal starting with `.`, or
/// `Infinity`, after optional whitespace and sign. Returns `NaN` when no
/// literal is present.
pub fn parse_float_prefix(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Render a number for display.
///
/// Integral values print without a fractional part (`1800`, not `1800.0`),
/// other values in their shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e21 {
        return format!("{:.0}", value);
    }
    format!("{}", value)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_plain() {
        assert_eq!(parse_int_prefix("30"), Some(30));
        assert_eq!(parse_int_prefix("  42"), Some(42));
        assert_eq!(parse_int_prefix("-7"), Some(-7));
        assert_eq!(parse_int_prefix("+7"), Some(7));
    }

    #[test]
    fn test_parse_int_stops_at_first_non_digit() {
        assert_eq!(parse_int_prefix("30abc"), Some(30));
        assert_eq!(parse_int_prefix("3.7"), Some(3));
        assert_eq!(parse_int_prefix("25 years"), Some(25));
    }

    #[test]
    fn test_parse_int_invalid() {
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("   "), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix(".5"), None);
    }

    #[test]
    fn test_parse_int_hex_literal() {
        assert_eq!(parse_int_prefix("0x1A"), Some(26));
        assert_eq!(parse_int_prefix("0x"), None);
    }

    #[test]
    fn test_parse_int_overflow_is_invalid() {
        assert_eq!(parse_int_prefix("99999999999999999999999"), None);
        assert_eq!(parse_int_prefix("9223372036854775808"), None);
        assert_eq!(parse_int_prefix("-9223372036854775809"), None);
    }

    #[test]
    fn test_parse_int_accepts_i64_bounds() {
        assert_eq!(parse_int_prefix("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_int_prefix("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-0x8000000000000000"), Some(i64::MIN));
    }

    #[test]
    fn test_parse_float_plain() {
        assert_eq!(parse_float_prefix("175"), 175.0);
        assert_eq!(parse_float_prefix("78.5"), 78.5);
        assert_eq!(parse_float_prefix(" -1.25"), -1.25);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("5."), 5.0);
    }

    #[test]
    fn test_parse_float_prefix_with_suffix() {
        assert_eq!(parse_float_prefix("78kg"), 78.0);
        assert_eq!(parse_float_prefix("1.2.3"), 1.2);
        assert_eq!(parse_float_prefix("180 cm"), 180.0);
    }

    #[test]
    fn test_parse_float_exponent() {
        assert_eq!(parse_float_prefix("1e3"), 1000.0);
        assert_eq!(parse_float_prefix("2.5E-1"), 0.25);
        // Dangling exponent is not part of the literal
        assert_eq!(parse_float_prefix("7e"), 7.0);
        assert_eq!(parse_float_prefix("7e+"), 7.0);
    }

    #[test]
    fn test_parse_float_infinity() {
        assert_eq!(parse_float_prefix("Infinity"), f64::INFINITY);
        assert_eq!(parse_float_prefix("-Infinityx"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_float_invalid_is_nan() {
        assert!(parse_float_prefix("abc").is_nan());
        assert!(parse_float_prefix("").is_nan());
        assert!(parse_float_prefix(".").is_nan());
        assert!(parse_float_prefix("-.").is_nan());
    }

    #[test]
    fn test_format_number_integral() {
        assert_eq!(format_number(1800.0), "1800");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_number_fractional() {
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(0.1), "0.1");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}

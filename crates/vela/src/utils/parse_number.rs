//! Lenient numeric parsing for path segments and body fields.
//!
//! Clients send ids as path text and personal bests as either JSON numbers or
//! numeric strings. Both are read the same forgiving way: surrounding
//! whitespace is skipped and the longest numeric prefix wins, so `"12abc"`
//! reads as 12 while `"abc"` has no value at all.

use serde_json::Value;

/// Leading integer of `raw`, or `None` when there are no digits to read.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Leading decimal number of `raw`, or `None` when it does not start with one.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end += 1;
    }
    let int_digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-') | Some(b'+')) {
            exp_end += 1;
        }
        let exp_digits = bytes[exp_end.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse().ok()
}

/// User id from a path segment. The value may lie outside the id column's
/// range; such ids are well formed but never match a row.
pub fn parse_user_id(raw: &str) -> Option<i64> {
    parse_int_prefix(raw)
}

/// Integer body field. Fractional numbers are truncated toward zero.
pub fn int_field(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

/// Floating-point body field.
pub fn float_field(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("42", Some(42))]
    #[case("  7", Some(7))]
    #[case("12abc", Some(12))]
    #[case("-3", Some(-3))]
    #[case("+8", Some(8))]
    #[case("0", Some(0))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("-", None)]
    #[case("1.9", Some(1))]
    fn reads_leading_integer(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_int_prefix(raw), expected);
    }

    #[rstest]
    #[case("12.3", Some(12.3))]
    #[case(" 4", Some(4.0))]
    #[case(".5", Some(0.5))]
    #[case("7.", Some(7.0))]
    #[case("1e3s", Some(1000.0))]
    #[case("2e", Some(2.0))]
    #[case("-0.25x", Some(-0.25))]
    #[case(".", None)]
    #[case("fast", None)]
    fn reads_leading_float(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_float_prefix(raw), expected);
    }

    #[test]
    fn user_id_out_of_column_range_is_still_a_number() {
        assert_eq!(parse_user_id("99999999999"), Some(99_999_999_999));
        assert_eq!(parse_user_id("id-1"), None);
        assert_eq!(parse_user_id("15"), Some(15));
    }

    #[test]
    fn body_fields_accept_numbers_and_numeric_strings() {
        assert_eq!(int_field(&json!(50)), Some(50));
        assert_eq!(int_field(&json!("50")), Some(50));
        assert_eq!(int_field(&json!(50.9)), Some(50));
        assert_eq!(int_field(&json!(true)), None);
        assert_eq!(float_field(&json!(12.3)), Some(12.3));
        assert_eq!(float_field(&json!("12.3")), Some(12.3));
        assert_eq!(float_field(&json!(null)), None);
    }
}

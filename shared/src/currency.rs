/// Glyph prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "₦";

/// Format an amount as `₦1,234.50`.
///
/// The sign is dropped: `format_currency(-x) == format_currency(x)`.
pub fn format_currency(value: f64) -> String {
    let fixed = to_fixed_2(value.abs());
    match fixed.split_once('.') {
        Some((whole, fraction)) => {
            format!("{}{}.{}", CURRENCY_SYMBOL, group_thousands(whole), fraction)
        }
        // NaN and infinities have no decimal point to anchor grouping on
        None => format!("{}{}", CURRENCY_SYMBOL, fixed),
    }
}

/// Fractional digits needed to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Two decimals with JS `toFixed(2)` rounding: the exact binary value is
/// rounded to the nearest cent and a tie goes to the larger magnitude.
fn to_fixed_2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits: Vec<char> = whole
        .chars()
        .chain(fraction.chars().chain(std::iter::repeat('0')).take(2))
        .collect();

    if fraction.chars().nth(2).is_some_and(|digit| digit >= '5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == '9' {
                *digit = '0';
            } else {
                *digit = char::from(*digit as u8 + 1);
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, '1');
        }
    }

    let split = digits.len() - 2;
    let whole: String = digits[..split].iter().collect();
    let cents: String = digits[split..].iter().collect();
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, whole, cents)
}

/// Insert a comma between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Rewrite a currency input value to two decimal places.
///
/// Returns `None` when the value is empty or not a finite number, in which
/// case the input is left as the user typed it.
pub fn normalize_decimal_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = trimmed.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(to_fixed_2(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_zero() {
        assert_eq!(format_currency(0.0), "₦0.00");
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(1234.5), "₦1,234.50");
        assert_eq!(format_currency(999.99), "₦999.99");
        assert_eq!(format_currency(1000.0), "₦1,000.00");
        assert_eq!(format_currency(1234567.891), "₦1,234,567.89");
        assert_eq!(format_currency(100000.0), "₦100,000.00");
    }

    #[test]
    fn test_format_currency_drops_sign() {
        for value in [0.0, 0.01, 12.3, 1234.5, 98765.4321, 1_000_000.0] {
            assert_eq!(format_currency(value), format_currency(-value));
        }
        assert_eq!(format_currency(-1234.5), "₦1,234.50");
    }

    #[test]
    fn test_format_currency_rounding_carries_into_grouping() {
        assert_eq!(format_currency(999.999), "₦1,000.00");
    }

    #[test]
    fn test_normalize_decimal_input() {
        assert_eq!(normalize_decimal_input("12"), Some("12.00".to_string()));
        assert_eq!(normalize_decimal_input("12.5"), Some("12.50".to_string()));
        assert_eq!(normalize_decimal_input(" 3.14159 "), Some("3.14".to_string()));
        assert_eq!(normalize_decimal_input(".5"), Some("0.50".to_string()));
    }

    #[test]
    fn test_ties_round_up_like_to_fixed() {
        assert_eq!(format_currency(0.125), "₦0.13");
        assert_eq!(format_currency(1.625), "₦1.63");
        assert_eq!(format_currency(-2.375), "₦2.38");
        assert_eq!(normalize_decimal_input("0.125"), Some("0.13".to_string()));
        assert_eq!(normalize_decimal_input("1.625"), Some("1.63".to_string()));
        assert_eq!(normalize_decimal_input("-0.125"), Some("-0.13".to_string()));
    }

    #[test]
    fn test_rounding_uses_exact_binary_value() {
        // 1.005 is stored just below the tie
        assert_eq!(format_currency(1.005), "₦1.00");
        assert_eq!(normalize_decimal_input("1.005"), Some("1.00".to_string()));
        assert_eq!(normalize_decimal_input("9.995"), Some("9.99".to_string()));
        assert_eq!(normalize_decimal_input("99.9951"), Some("100.00".to_string()));
    }

    #[test]
    fn test_normalize_decimal_input_leaves_invalid_values() {
        assert_eq!(normalize_decimal_input(""), None);
        assert_eq!(normalize_decimal_input("   "), None);
        assert_eq!(normalize_decimal_input("abc"), None);
        assert_eq!(normalize_decimal_input("NaN"), None);
        assert_eq!(normalize_decimal_input("inf"), None);
    }
}

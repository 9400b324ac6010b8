/// 표시 문자열에서 숫자를 읽어낸다.
///
/// 숫자, `-`, `.` 이외의 문자를 모두 지운 뒤 앞에서부터 읽을 수 있는 가장 긴
/// 실수 접두어를 해석한다. 남은 숫자가 없으면 NaN을 반환하며,
/// 호출하는 쪽은 NaN을 "값 없음"으로 취급해야 한다.
///
/// ```
/// use emi_calculator::normalize::parse_displayed_number;
/// assert_eq!(parse_displayed_number("₹1,00,00,000"), 10_000_000.0);
/// assert!(parse_displayed_number("₹").is_nan());
/// ```
pub fn parse_displayed_number(display: &str) -> f64 {
    let cleaned: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();
    numeric_prefix(&cleaned)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// `-?\d*(\.\d*)?` 형태의 가장 긴 접두어를 정규화해 돌려준다. 숫자가 하나도 없으면 None.
fn numeric_prefix(cleaned: &str) -> Option<String> {
    let mut chars = cleaned.chars().peekable();
    let mut out = String::new();
    if chars.peek() == Some(&'-') {
        out.push('-');
        chars.next();
    }

    let mut int_digits = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        int_digits.push(c);
        chars.next();
    }

    let mut frac_digits = String::new();
    if chars.peek() == Some(&'.') {
        chars.next();
        while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
            frac_digits.push(c);
            chars.next();
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }
    if int_digits.is_empty() {
        int_digits.push('0');
    }
    out.push_str(&int_digits);
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(&frac_digits);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_symbol_and_grouping() {
        assert_eq!(parse_displayed_number("₹1,00,00,000"), 10_000_000.0);
        assert_eq!(parse_displayed_number("₹ 12,345.67"), 12_345.67);
    }

    #[test]
    fn keeps_leading_minus() {
        assert_eq!(parse_displayed_number("-₹1,234"), -1234.0);
    }

    #[test]
    fn stops_at_first_invalid_character() {
        assert_eq!(parse_displayed_number("1.2.3"), 1.2);
        assert_eq!(parse_displayed_number("5-3"), 5.0);
        assert_eq!(parse_displayed_number(".5"), 0.5);
        assert_eq!(parse_displayed_number("7."), 7.0);
    }

    #[test]
    fn nothing_numeric_is_nan() {
        assert!(parse_displayed_number("").is_nan());
        assert!(parse_displayed_number("₹,").is_nan());
        assert!(parse_displayed_number("--5").is_nan());
        assert!(parse_displayed_number("-").is_nan());
        assert!(parse_displayed_number(".").is_nan());
    }
}

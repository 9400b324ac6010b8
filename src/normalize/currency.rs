use super::decimal::round_half_up;

/// 통화 기호(INR).
pub const CURRENCY_SYMBOL: &str = "₹";

/// INR 기본 소수 자릿수. 최대 자릿수가 이보다 크면 최소 자릿수로 쓴다.
const CURRENCY_MINOR_DIGITS: usize = 2;

/// 금액을 `₹` 접두어와 인도식 자릿수 묶음(3자리 후 2자리씩)으로 표시한다.
///
/// `decimal_places`는 최대 소수 자릿수다. 최소 자릿수는 `min(2, decimal_places)`이며
/// 그 사이의 끝자리 0은 지운다. 반올림은 값의 최단 십진 표기 기준으로 0에서 먼 쪽이다
/// (1.005는 ₹1.01).
/// NaN/무한대도 문자열로 표시하며 패닉하지 않는다.
///
/// ```
/// use emi_calculator::normalize::format_as_currency_display;
/// assert_eq!(format_as_currency_display(10_000_000.0, 0), "₹1,00,00,000");
/// ```
pub fn format_as_currency_display(amount: f64, decimal_places: usize) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_nan() {
        "-"
    } else {
        ""
    };
    if amount.is_nan() {
        return format!("{CURRENCY_SYMBOL}NaN");
    }
    if amount.is_infinite() {
        return format!("{sign}{CURRENCY_SYMBOL}∞");
    }

    let (int_digits, frac_digits) = round_half_up(amount.abs(), decimal_places);
    let min_frac = decimal_places.min(CURRENCY_MINOR_DIGITS);
    let frac = trim_fraction(&frac_digits, min_frac);

    let mut out = String::with_capacity(int_digits.len() + frac.len() + 8);
    out.push_str(sign);
    out.push_str(CURRENCY_SYMBOL);
    out.push_str(&format_grouped_indian(&int_digits));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// 정수 자릿수 문자열에 인도식 자릿수 구분 기호를 넣는다.
///
/// 오른쪽 3자리를 한 묶음으로, 그 왼쪽은 2자리씩 묶는다(1,00,00,000).
pub fn format_grouped_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    let mut out = groups.join(",");
    out.push(',');
    out.push_str(last_three);
    out
}

fn trim_fraction(frac: &str, min_len: usize) -> &str {
    let trimmed = frac.trim_end_matches('0');
    if trimmed.len() >= min_len {
        trimmed
    } else {
        &frac[..min_len.min(frac.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn indian_grouping_of_one_crore() {
        assert_eq!(format_as_currency_display(10_000_000.0, 0), "₹1,00,00,000");
    }

    #[test]
    fn small_numbers_are_not_grouped() {
        assert_eq!(format_as_currency_display(0.0, 0), "₹0");
        assert_eq!(format_as_currency_display(999.0, 0), "₹999");
        assert_eq!(format_as_currency_display(1000.0, 0), "₹1,000");
        assert_eq!(format_as_currency_display(123_456.0, 0), "₹1,23,456");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_as_currency_display(189_880.952, 0), "₹1,89,881");
        assert_eq!(format_as_currency_display(2.5, 0), "₹3");
    }

    #[test]
    fn fraction_digits_follow_currency_minimum() {
        assert_eq!(format_as_currency_display(1234.5, 2), "₹1,234.50");
        assert_eq!(format_as_currency_display(1234.0, 1), "₹1,234.0");
        assert_eq!(format_as_currency_display(1234.5, 4), "₹1,234.50");
        assert_eq!(format_as_currency_display(1234.56789, 3), "₹1,234.568");
        assert_eq!(format_as_currency_display(0.05, 2), "₹0.05");
        assert_eq!(format_as_currency_display(1.005, 2), "₹1.01");
        assert_eq!(format_as_currency_display(1.255, 2), "₹1.26");
        assert_eq!(format_as_currency_display(0.285, 2), "₹0.29");
        assert_eq!(format_as_currency_display(1.045, 2), "₹1.05");
        assert_eq!(format_as_currency_display(-1.005, 2), "-₹1.01");
        assert_eq!(format_as_currency_display(99_999.995, 2), "₹1,00,000.00");
    }

    #[test]
    fn negative_and_non_finite_values() {
        assert_eq!(format_as_currency_display(-1234.0, 0), "-₹1,234");
        assert_eq!(format_as_currency_display(f64::NAN, 0), "₹NaN");
        assert_eq!(format_as_currency_display(f64::INFINITY, 0), "₹∞");
        assert_eq!(format_as_currency_display(f64::NEG_INFINITY, 2), "-₹∞");
    }

    #[test]
    fn huge_values_do_not_panic() {
        let s = format_as_currency_display(f64::MAX, 2);
        assert!(s.starts_with("₹17,97,69"), "{s}");
        assert!(s.ends_with(".00"));
    }

    #[test]
    fn grouping_helper() {
        assert_eq!(format_grouped_indian("1"), "1");
        assert_eq!(format_grouped_indian("1234"), "1,234");
        assert_eq!(format_grouped_indian("12345678"), "1,23,45,678");
        assert_eq!(format_grouped_indian("123456789"), "12,34,56,789");
    }
}

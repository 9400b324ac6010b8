//! 표시 형식/해석/범위 맞춤 회귀 및 성질 테스트.
use emi_calculator::normalize::{
    clamp_to_range, format_as_currency_display, parse_displayed_number, percent_in_range,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn one_crore_is_grouped_indian_style() {
    assert_eq!(format_as_currency_display(10_000_000.0, 0), "₹1,00,00,000");
}

#[test]
fn one_crore_parses_back() {
    assert_eq!(parse_displayed_number("₹1,00,00,000"), 10_000_000.0);
}

#[test]
fn zero_tenure_takes_falsy_branch() {
    let v = clamp_to_range(0.0, 10.0, 1.0, 0.0, false);
    assert_eq!(v.value(), 0.0);
    // 반올림 경로를 거치지 않았으므로 고정 소수 자릿수가 없다.
    assert_eq!(v.decimals(), None);
}

#[test]
fn rate_rounds_to_step() {
    assert_eq!(clamp_to_range(5.0, 15.0, 0.1, 8.53, true).to_string(), "8.5");
}

#[test]
fn currency_ties_round_up_on_decimal_digits() {
    assert_eq!(format_as_currency_display(1.005, 2), "₹1.01");
    assert_eq!(format_as_currency_display(1.255, 2), "₹1.26");
    assert_eq!(format_as_currency_display(12_345.675, 2), "₹12,345.68");
}

#[test]
fn configured_step_ties_round_up() {
    assert_eq!(clamp_to_range(5.0, 15.0, 0.05, 8.25, true).to_string(), "8.3");
    assert_eq!(clamp_to_range(5.0, 15.0, 0.25, 8.25, true).to_string(), "8.3");
    assert_eq!(clamp_to_range(5.0, 15.0, 0.05, 8.75, true).to_string(), "8.8");
}

/// 표시 문자열을 소수 `places` 자리 고정 정수(최소 단위 개수)로 읽는다.
fn minor_units(display: &str, places: usize) -> u64 {
    let plain: String = display.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    let frac = format!("{frac_part:0<places$}");
    format!("{int_part}{frac}").parse().expect("digits only")
}

proptest! {
    #[test]
    fn currency_rounds_decimal_ties_up(
        int_part in 0u64..1_000_000,
        frac in 0u64..1000,
        places in 1usize..=3,
    ) {
        let frac = frac % 10u64.pow(places as u32);
        let literal = format!("{int_part}.{frac:0places$}5");
        let amount: f64 = literal.parse().expect("decimal literal");
        let expected = int_part * 10u64.pow(places as u32) + frac + 1;
        let shown = format_as_currency_display(amount, places);
        prop_assert_eq!(minor_units(&shown, places), expected, "{} -> {}", literal, shown);
    }

    #[test]
    fn currency_rounds_non_ties_to_nearest(
        int_part in 0u64..1_000_000,
        frac in 0u64..1000,
        next in prop_oneof![0u64..5, 6u64..10],
        places in 1usize..=3,
    ) {
        let frac = frac % 10u64.pow(places as u32);
        let literal = format!("{int_part}.{frac:0places$}{next}");
        let amount: f64 = literal.parse().expect("decimal literal");
        let expected = int_part * 10u64.pow(places as u32) + frac + u64::from(next > 5);
        let shown = format_as_currency_display(amount, places);
        prop_assert_eq!(minor_units(&shown, places), expected, "{} -> {}", literal, shown);
    }

    #[test]
    fn step_rounding_matches_decimal_reference(tenths in 50u64..150, step_idx in 0usize..3) {
        // 소수 둘째 자리가 5인 값을 0.05/0.25 스텝으로 맞추면 소수 첫째 자리는 올림된다.
        let step = [0.05, 0.25, 0.5][step_idx];
        let value = tenths as f64 / 10.0 + 0.05;
        let v = clamp_to_range(5.0, 15.0, step, value, true);
        prop_assert!((5.0..=15.0).contains(&v.value()));
        let snapped_hundredths = ((value / step).round() * step * 100.0).round() as u64;
        let expected_tenths = (snapped_hundredths + 5) / 10;
        let expected = (expected_tenths as f64 / 10.0).min(15.0);
        prop_assert_eq!(v.value(), expected, "value={} step={}", value, step);
    }

    #[test]
    fn clamp_always_in_range(
        min in -1e6f64..1e6,
        span in 0.0f64..1e6,
        value in prop_oneof![any::<f64>(), Just(f64::NAN), Just(0.0), -1e12f64..1e12],
    ) {
        let max = min + span;
        let v = clamp_to_range(min, max, 1.0, value, false).value();
        prop_assert!(v >= min && v <= max, "v={v} min={min} max={max}");
    }

    #[test]
    fn clamp_with_rounding_stays_in_range(value in -100.0f64..100.0) {
        let v = clamp_to_range(5.0, 15.0, 0.1, value, true).value();
        prop_assert!((5.0..=15.0).contains(&v));
    }

    #[test]
    fn format_then_parse_recovers_integers(n in 0u64..=1_000_000_000) {
        let n = n as f64;
        prop_assert_eq!(parse_displayed_number(&format_as_currency_display(n, 0)), n);
    }

    #[test]
    fn percent_endpoints(min in -1e6f64..1e6, span in 1e-3f64..1e6) {
        let max = min + span;
        prop_assert_eq!(percent_in_range(min, max, min), 0.0);
        prop_assert!((percent_in_range(min, max, max) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn format_never_panics(x in any::<f64>(), places in 0usize..8) {
        let s = format_as_currency_display(x, places);
        prop_assert!(s.contains('₹'));
    }
}

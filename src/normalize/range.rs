use serde::{Deserialize, Serialize};
use std::fmt;

use super::decimal::round_half_up;

/// 입력 항목 하나의 범위 설정. 프로그램 시작 시 한 번 정하고 바꾸지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default_value: f64,
}

impl RangeSpec {
    pub const fn new(min: f64, max: f64, step: f64, default_value: f64) -> Self {
        Self {
            min,
            max,
            step,
            default_value,
        }
    }

    /// 값을 이 범위로 맞춘다. `clamp_to_range`와 같다.
    pub fn clamp(&self, value: f64, round_to_step: bool) -> NormalizedValue {
        clamp_to_range(self.min, self.max, self.step, value, round_to_step)
    }

    /// 슬라이더 채움 비율 [%].
    pub fn percent_of(&self, value: f64) -> f64 {
        percent_in_range(self.min, self.max, value)
    }
}

/// 범위 안으로 맞춘 값.
///
/// 스텝 반올림을 거친 값은 소수 자릿수를 함께 들고 있어 표시 문자열이 고정된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedValue {
    value: f64,
    decimals: Option<usize>,
}

impl NormalizedValue {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// 스텝 반올림으로 고정된 소수 자릿수. 반올림하지 않은 값이면 None.
    pub fn decimals(&self) -> Option<usize> {
        self.decimals
    }
}

impl fmt::Display for NormalizedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decimals {
            Some(d) => write!(f, "{:.*}", d, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

impl From<NormalizedValue> for f64 {
    fn from(v: NormalizedValue) -> Self {
        v.value
    }
}

/// 스텝 반올림 결과의 소수 자릿수.
const STEP_DECIMALS: usize = 1;

/// 현재 값이 범위에서 차지하는 위치를 0~100으로 환산한다. 내부에서 클램프하지 않는다.
pub fn percent_in_range(min: f64, max: f64, value: f64) -> f64 {
    (value - min) / (max - min) * 100.0
}

/// 값을 `[min, max]` 범위로 맞춘다.
///
/// - 값이 0이거나 NaN, 또는 `min`보다 작으면 `min`
/// - `max`보다 크면 `max`
/// - `round_to_step`이면 가장 가까운 `step` 배수로 반올림하고 소수 1자리로 고정
/// - 그 외에는 그대로 둔다(입력 중인 값을 억지로 스텝에 맞추지 않는다)
///
/// 0은 입력이 비어 있는 것으로 간주되어 `min`으로 바뀐다.
pub fn clamp_to_range(
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    round_to_step: bool,
) -> NormalizedValue {
    if value == 0.0 || value.is_nan() || value < min {
        return NormalizedValue {
            value: min,
            decimals: None,
        };
    }
    if value > max {
        return NormalizedValue {
            value: max,
            decimals: None,
        };
    }
    if round_to_step && step > 0.0 {
        let snapped = (value / step).round() * step;
        let fixed = fix_step_decimals(snapped).max(min).min(max);
        return NormalizedValue {
            value: fixed,
            decimals: Some(STEP_DECIMALS),
        };
    }
    NormalizedValue {
        value,
        decimals: None,
    }
}

/// 스텝 배수를 소수 `STEP_DECIMALS` 자리로 고정한다. 정확히 절반이면 0에서 먼 쪽으로 올린다.
fn fix_step_decimals(snapped: f64) -> f64 {
    if !snapped.is_finite() {
        return snapped;
    }
    let (int_digits, frac_digits) = round_half_up(snapped.abs(), STEP_DECIMALS);
    let sign = if snapped < 0.0 { "-" } else { "" };
    format!("{sign}{int_digits}.{frac_digits}")
        .parse()
        .unwrap_or(snapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_treated_as_missing() {
        let v = clamp_to_range(0.0, 10.0, 1.0, 0.0, false);
        assert_eq!(v.value(), 0.0);
        let v = clamp_to_range(5.0, 15.0, 0.1, 0.0, true);
        assert_eq!(v.value(), 5.0);
    }

    #[test]
    fn rate_is_rounded_to_one_decimal() {
        let v = clamp_to_range(5.0, 15.0, 0.1, 8.53, true);
        assert_eq!(v.to_string(), "8.5");
        assert_eq!(v.value(), 8.5);
        assert_eq!(v.decimals(), Some(1));
        let v = clamp_to_range(5.0, 15.0, 0.1, 9.0, true);
        assert_eq!(v.to_string(), "9.0");
    }

    #[test]
    fn step_ties_round_up() {
        assert_eq!(clamp_to_range(5.0, 15.0, 0.05, 8.25, true).to_string(), "8.3");
        assert_eq!(clamp_to_range(5.0, 15.0, 0.05, 9.25, true).to_string(), "9.3");
        assert_eq!(clamp_to_range(5.0, 15.0, 0.05, 10.25, true).to_string(), "10.3");
        assert_eq!(clamp_to_range(5.0, 15.0, 0.25, 8.3, true).to_string(), "8.3");
        assert_eq!(clamp_to_range(-5.0, 5.0, 0.25, -1.25, true).to_string(), "-1.3");
    }

    #[test]
    fn nan_bounds_do_not_panic() {
        let v = clamp_to_range(f64::NAN, 15.0, 0.1, 8.53, true);
        assert_eq!(v.value(), 8.5);
        let v = clamp_to_range(5.0, f64::NAN, 0.1, 8.53, true);
        assert_eq!(v.value(), 8.5);
    }

    #[test]
    fn out_of_range_values_snap_to_bounds() {
        assert_eq!(clamp_to_range(0.0, 10.0, 1.0, 42.0, false).value(), 10.0);
        assert_eq!(clamp_to_range(5.0, 15.0, 0.1, 2.0, true).value(), 5.0);
        assert_eq!(clamp_to_range(0.0, 10.0, 1.0, f64::NAN, false).value(), 0.0);
        assert_eq!(
            clamp_to_range(0.0, 10.0, 1.0, f64::INFINITY, false).value(),
            10.0
        );
    }

    #[test]
    fn unrounded_value_passes_through() {
        let v = clamp_to_range(0.0, 100_000_000.0, 20_000.0, 1_234_567.0, false);
        assert_eq!(v.value(), 1_234_567.0);
        assert_eq!(v.to_string(), "1234567");
    }

    #[test]
    fn percent_endpoints() {
        assert_eq!(percent_in_range(5.0, 15.0, 5.0), 0.0);
        assert_eq!(percent_in_range(5.0, 15.0, 15.0), 100.0);
        assert_eq!(percent_in_range(0.0, 10.0, 5.0), 50.0);
    }
}

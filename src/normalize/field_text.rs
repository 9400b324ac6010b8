use crate::config::RangeSet;
use crate::field::LoanField;
use crate::normalize::{
    clamp_to_range, format_as_currency_display, parse_displayed_number, NormalizedValue,
};

/// 텍스트 상자의 문자열을 해당 항목 범위에 맞춘 값으로 바꾼다.
///
/// 해석할 수 없는 문자열(NaN)은 범위 최솟값이 된다.
pub fn normalize_field_text(field: LoanField, ranges: &RangeSet, text: &str) -> NormalizedValue {
    let spec = field.range(ranges);
    let raw = parse_displayed_number(text);
    clamp_to_range(spec.min, spec.max, spec.step, raw, field.rounds_to_step())
}

/// 항목 값을 텍스트 상자 표시 문자열로 만든다. 원금은 통화 형식, 나머지는 숫자 그대로.
pub fn display_field_value(field: LoanField, value: &NormalizedValue) -> String {
    if field.is_currency() {
        format_as_currency_display(value.value(), 0)
    } else {
        value.to_string()
    }
}
